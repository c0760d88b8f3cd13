// src/main.rs: Activity roster (Rust + Yew + WASM)
// Lists activities from GET /activities, signs students up and removes them.

mod api;
mod app;
mod config;
mod console;
mod markup;
mod model;
mod notice;
mod state;
mod view;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
