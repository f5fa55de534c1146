mod app;
mod error;
mod gallery;
mod geometry;
mod input;
mod layout;
mod models;
mod tween;
mod ui;

use app::TriptychApp;

fn main() {
    // Prefer C numeric locale up-front; GTK may later adjust locale again.
    std::env::set_var("LC_NUMERIC", "C");
    unsafe {
        libc::setlocale(libc::LC_NUMERIC, b"C\0".as_ptr().cast());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triptych=info".parse().unwrap()),
        )
        .init();

    let app = TriptychApp::new();
    std::process::exit(app.run());
}
