fn main() {
    if let Err(e) = storefront_web::launch() {
        web_sys_x::console::error_1(&format!("Storefront failed to start: {e}").into());
    }
}
