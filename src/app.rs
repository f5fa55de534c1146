use gtk4::prelude::*;
use gtk4::Application;

use crate::ui::GalleryWindow;

const APP_ID: &str = "dev.triptych.Gallery";

pub struct TriptychApp {
    app: Application,
}

impl TriptychApp {
    pub fn new() -> Self {
        let app = Application::builder().application_id(APP_ID).build();

        app.connect_activate(Self::on_activate);

        Self { app }
    }

    pub fn run(&self) -> i32 {
        self.app.run().into()
    }

    fn on_activate(app: &Application) {
        match GalleryWindow::new(app) {
            Ok(window) => {
                window.present();
                // Keep the window alive by storing it on the Application.
                unsafe {
                    app.set_data("gallery-window", window);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "startup failed");
                std::process::exit(1);
            }
        }
    }
}

impl Default for TriptychApp {
    fn default() -> Self {
        Self::new()
    }
}
