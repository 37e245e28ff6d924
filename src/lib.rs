// Input handler module for pointer-driven move/resize gestures
pub mod input_handler;

// Window registry: the single source of truth for open windows
pub mod state;

// App catalogue and launch bindings
pub mod launcher;

// Frame layout and pointer routing
pub mod surface;

// Desktop shell mounted per session
pub mod shell;

pub mod config;
pub mod error;
pub mod file_store;
pub mod logging;
pub mod session;

// Tauri command bridge
#[cfg(feature = "shell")]
mod commands;

pub use config::ShellConfig;
pub use error::{ConfigError, ShellError};
pub use input_handler::{Point, Rect, ResizeHandle, SizeLimits};
pub use launcher::{AppContent, AppEntry, AppKind, LaunchSurface};
pub use shell::{Desktop, Shell, TaskbarItem};
pub use state::window::{WindowId, WindowInstance};
pub use state::WindowRegistry;
pub use surface::{Capture, ChromeButton, FrameLayout, InteractionSurface, Viewport};

#[cfg(feature = "shell")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::FileStoreState;
    use file_store::MemoryFileStore;
    use std::sync::Mutex;

    logging::init();

    let config = ShellConfig::load_or_default();
    tracing::info!(?config, "starting shell");

    tauri::Builder::default()
        .manage(Mutex::new(Shell::new(config)))
        .manage(FileStoreState(Mutex::new(MemoryFileStore::new())))
        .invoke_handler(tauri::generate_handler![
            // Session
            commands::sign_in,
            commands::sign_out,
            // Window management
            commands::list_tiles,
            commands::launch_app,
            commands::open_document,
            commands::close_window,
            commands::minimize_window,
            commands::maximize_window,
            commands::focus_window,
            commands::list_windows,
            commands::window_layout,
            commands::set_viewport,
            commands::toggle_start_menu,
            commands::close_start_menu,
            // Pointer gestures
            commands::frame_pointer_down,
            commands::title_bar_pointer_down,
            commands::resize_handle_pointer_down,
            commands::pointer_move,
            commands::pointer_up,
            commands::release_pointer,
            // File store
            commands::list_files,
            commands::create_file,
            commands::update_file,
            commands::delete_file,
            commands::restore_file,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
