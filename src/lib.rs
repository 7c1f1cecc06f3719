// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod callback;
pub use callback::*;

pub mod mvc;
pub mod ui;

use ui::*;

/// Creates the main window and connects it to a fresh, empty task list.
pub fn init() -> Result<MainWindow, slint::PlatformError> {
    let view_handle = MainWindow::new()?;

    let home_controller = mvc::HomeController::new(mvc::task_id_repo());
    let rows = mvc::TaskRowsModel::default();
    home_adapter::connect(&view_handle, home_controller.clone(), rows.clone());
    task_list_adapter::connect(&view_handle, home_controller, rows);

    Ok(view_handle)
}

pub fn run() -> Result<(), slint::PlatformError> {
    let main_window = init()?;
    log::info!("to.do started");
    main_window.run()
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run() {
        log::error!("Runtime error: {}", e);
    }
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: slint::android::AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(
        if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info },
    ));

    if let Err(e) = slint::android::init(app) {
        log::error!("Failed to initialize android backend: {}", e);
        return;
    }

    if let Err(e) = run() {
        log::error!("Runtime error: {}", e);
    }
}
