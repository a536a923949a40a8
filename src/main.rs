use poker_client::components::App;
use poker_client::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Poker client starting ({}, {})", CONFIG.environment, CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
