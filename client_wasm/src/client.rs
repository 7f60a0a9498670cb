use std::cell::RefCell;

use game_core::{Config, PaddleCommand, Simulation, Surface};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSink;
use crate::input;

/// Main client state
pub struct Client {
    simulation: Simulation,
    sink: CanvasSink,
}

impl Client {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let sink = CanvasSink::new(canvas)?;
        let surface = Surface::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;

        Ok(Self {
            simulation: Simulation::new(surface, Config::new(), seed),
            sink,
        })
    }

    fn command(&mut self, command: PaddleCommand) {
        self.simulation.set_human_command(command);
    }

    pub fn render(&mut self, now_ms: f64) {
        self.simulation.tick(now_ms);
        self.simulation.render(&mut self.sink);
    }
}

// Global client storage for WASM bindings
thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let client = Client::new(&canvas)?;
    log::info!("Client ready on {}x{} canvas", canvas.width(), canvas.height());
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_client(|client| client.simulation.resize(width as f32, height as f32))
}

#[wasm_bindgen]
pub fn handle_key_down(key: &str) -> Result<(), JsValue> {
    with_client(|client| {
        if let Some(command) = input::key_down_command(key) {
            client.command(command);
        }
    })
}

#[wasm_bindgen]
pub fn handle_key_up(key: &str) -> Result<(), JsValue> {
    with_client(|client| client.command(input::key_up_command(key)))
}

#[wasm_bindgen]
pub fn handle_touch(client_y: f32) -> Result<(), JsValue> {
    with_client(|client| {
        let height = client.simulation.surface.height;
        client.command(input::touch_command(client_y, height));
    })
}

#[wasm_bindgen]
pub fn handle_touch_end() -> Result<(), JsValue> {
    with_client(|client| client.command(input::touch_end_command()))
}

/// Advance to `now_ms` (an animation-frame timestamp) and draw
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<(), JsValue> {
    with_client(|client| client.render(now_ms))
}
