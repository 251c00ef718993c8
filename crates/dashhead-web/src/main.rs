//! WASM entry point for Leptos CSR app

#[cfg(feature = "csr")]
fn main() {
    use dashhead_web::App;
    use leptos::mount::mount_to_body;

    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("Build with `trunk build --features csr` for the browser app, or run `dashhead serve`.");
}
