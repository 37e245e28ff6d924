// Tauri commands bridging the webview frontend to the shell

use crate::file_store::{FileId, FileRecord, FileStore, ListFilter, MemoryFileStore, NewFile};
use crate::input_handler::{Point, ResizeHandle};
use crate::launcher::{self, AppEntry, LaunchSurface};
use crate::session::UserId;
use crate::shell::{Desktop, Shell, TaskbarItem};
use crate::state::window::{WindowId, WindowInstance};
use crate::surface::{Capture, ChromeButton, FrameLayout, Viewport};
use serde::Serialize;
use std::sync::Mutex;
use tauri::{AppHandle, Emitter, State};

// Event payload types for frontend communication
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowsChangedPayload {
    frames: Vec<FrameLayout>,
    taskbar: Vec<TaskbarItem>,
    start_menu_open: bool,
}

#[derive(Clone, Serialize)]
struct CapturePayload {
    capture: Capture,
}

pub struct FileStoreState(pub Mutex<MemoryFileStore>);

fn parse_file_id(id: &str) -> Result<FileId, String> {
    id.parse().map_err(|e| format!("Invalid file id {}: {}", id, e))
}

fn with_desktop<T>(
    state: &State<Mutex<Shell>>,
    f: impl FnOnce(&mut Desktop) -> Result<T, String>,
) -> Result<T, String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    let desktop = shell.desktop_mut().map_err(|e| e.to_string())?;
    f(desktop)
}

/// Emit the full layout after a mutation
fn emit_windows(app: &AppHandle, desktop: &Desktop) -> Result<(), String> {
    app.emit(
        "windows-changed",
        WindowsChangedPayload {
            frames: desktop.layout(),
            taskbar: desktop.taskbar_items(),
            start_menu_open: desktop.is_start_menu_open(),
        },
    )
    .map_err(|e| e.to_string())
}

/// Tell the frontend to attach or drop its document-wide pointer listeners
fn emit_capture(app: &AppHandle, capture: Capture) -> Result<Capture, String> {
    if capture != Capture::Unchanged {
        app.emit("pointer-capture", CapturePayload { capture })
            .map_err(|e| e.to_string())?;
    }
    Ok(capture)
}

// ===== Session Commands =====

#[tauri::command]
pub fn sign_in(user_id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    let desktop = shell.sign_in(UserId::new(user_id));
    emit_windows(&app, desktop)
}

#[tauri::command]
pub fn sign_out(state: State<Mutex<Shell>>) -> Result<(), String> {
    let mut shell = state.lock().map_err(|e| e.to_string())?;
    shell.sign_out();
    Ok(())
}

// ===== Window Management Commands =====

/// Tiles for one launch surface (desktop icons, start menu or taskbar)
#[tauri::command]
pub fn list_tiles(surface: LaunchSurface) -> Vec<AppEntry> {
    launcher::entries_for(surface)
}

#[tauri::command]
pub fn launch_app(
    surface: LaunchSurface,
    app_id: String,
    app: AppHandle,
    state: State<Mutex<Shell>>,
) -> Result<WindowInstance, String> {
    with_desktop(&state, |desktop| {
        let window = desktop
            .launch_app(surface, &app_id)
            .map_err(|e| e.to_string())?
            .clone();
        emit_windows(&app, desktop)?;
        Ok(window)
    })
}

#[tauri::command]
pub fn open_document(
    file_id: String,
    app: AppHandle,
    state: State<Mutex<Shell>>,
    files: State<FileStoreState>,
) -> Result<WindowInstance, String> {
    let id = parse_file_id(&file_id)?;
    let file = files
        .0
        .lock()
        .map_err(|e| e.to_string())?
        .get(id)
        .map_err(|e| e.to_string())?;

    with_desktop(&state, |desktop| {
        let window = desktop
            .open_document(&file)
            .map_err(|e| e.to_string())?
            .clone();
        emit_windows(&app, desktop)?;
        Ok(window)
    })
}

#[tauri::command]
pub fn close_window(id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    chrome_action(WindowId::from(id), ChromeButton::Close, &app, &state)
}

#[tauri::command]
pub fn minimize_window(id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    chrome_action(WindowId::from(id), ChromeButton::Minimize, &app, &state)
}

#[tauri::command]
pub fn maximize_window(id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    chrome_action(WindowId::from(id), ChromeButton::Maximize, &app, &state)
}

fn chrome_action(
    id: WindowId,
    button: ChromeButton,
    app: &AppHandle,
    state: &State<Mutex<Shell>>,
) -> Result<(), String> {
    with_desktop(state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        let capture = surface.chrome_button(registry, &id, button);
        emit_capture(app, capture)?;
        emit_windows(app, desktop)
    })
}

#[tauri::command]
pub fn focus_window(id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        surface.frame_pointer_down(registry, &WindowId::from(id));
        emit_windows(&app, desktop)
    })
}

#[tauri::command]
pub fn list_windows(state: State<Mutex<Shell>>) -> Result<Vec<WindowInstance>, String> {
    with_desktop(&state, |desktop| Ok(desktop.registry().list_windows().to_vec()))
}

#[tauri::command]
pub fn window_layout(state: State<Mutex<Shell>>) -> Result<Vec<FrameLayout>, String> {
    with_desktop(&state, |desktop| Ok(desktop.layout()))
}

#[tauri::command]
pub fn set_viewport(
    width: f64,
    height: f64,
    app: AppHandle,
    state: State<Mutex<Shell>>,
) -> Result<(), String> {
    with_desktop(&state, |desktop| {
        desktop.set_viewport(Viewport::new(width, height));
        emit_windows(&app, desktop)
    })
}

#[tauri::command]
pub fn toggle_start_menu(app: AppHandle, state: State<Mutex<Shell>>) -> Result<bool, String> {
    with_desktop(&state, |desktop| {
        let open = desktop.toggle_start_menu();
        emit_windows(&app, desktop)?;
        Ok(open)
    })
}

#[tauri::command]
pub fn close_start_menu(app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    with_desktop(&state, |desktop| {
        desktop.close_start_menu();
        emit_windows(&app, desktop)
    })
}

// ===== Pointer Gesture Commands =====

#[tauri::command]
pub fn frame_pointer_down(id: String, app: AppHandle, state: State<Mutex<Shell>>) -> Result<(), String> {
    focus_window(id, app, state)
}

#[tauri::command]
pub fn title_bar_pointer_down(
    id: String,
    x: f64,
    y: f64,
    app: AppHandle,
    state: State<Mutex<Shell>>,
) -> Result<Capture, String> {
    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        let capture = surface.title_bar_pointer_down(registry, &WindowId::from(id), Point::new(x, y));
        emit_windows(&app, desktop)?;
        emit_capture(&app, capture)
    })
}

#[tauri::command]
pub fn resize_handle_pointer_down(
    id: String,
    handle: String,
    x: f64,
    y: f64,
    app: AppHandle,
    state: State<Mutex<Shell>>,
) -> Result<Capture, String> {
    let handle = ResizeHandle::from_str(&handle)
        .ok_or_else(|| format!("Invalid resize handle: {}", handle))?;

    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        let capture = surface.resize_handle_pointer_down(
            registry,
            &WindowId::from(id),
            handle,
            Point::new(x, y),
        );
        emit_windows(&app, desktop)?;
        emit_capture(&app, capture)
    })
}

#[tauri::command]
pub fn pointer_move(x: f64, y: f64, app: AppHandle, state: State<Mutex<Shell>>) -> Result<Capture, String> {
    // Polled on every pointer-move, so no logging here
    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        if !surface.is_capturing() {
            return Ok(Capture::Unchanged);
        }
        let capture = surface.pointer_move(registry, Point::new(x, y));
        emit_windows(&app, desktop)?;
        emit_capture(&app, capture)
    })
}

#[tauri::command]
pub fn pointer_up(x: f64, y: f64, app: AppHandle, state: State<Mutex<Shell>>) -> Result<Capture, String> {
    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        let capture = surface.pointer_up(registry, Point::new(x, y));
        emit_windows(&app, desktop)?;
        emit_capture(&app, capture)
    })
}

/// Blur / visibility-change fallback for a pointer-up that never arrives
#[tauri::command]
pub fn release_pointer(app: AppHandle, state: State<Mutex<Shell>>) -> Result<Capture, String> {
    with_desktop(&state, |desktop| {
        let (registry, surface) = desktop.parts_mut();
        let capture = surface.release(registry);
        emit_windows(&app, desktop)?;
        emit_capture(&app, capture)
    })
}

// ===== File Store Commands =====

fn current_user(state: &State<Mutex<Shell>>) -> Result<Option<UserId>, String> {
    let shell = state.lock().map_err(|e| e.to_string())?;
    Ok(shell.session().map(|s| s.user.clone()))
}

#[tauri::command]
pub fn list_files(
    trash: bool,
    state: State<Mutex<Shell>>,
    files: State<FileStoreState>,
) -> Result<Vec<FileRecord>, String> {
    let viewer = current_user(&state)?;
    let filter = if trash { ListFilter::Trash } else { ListFilter::Active };
    let store = files.0.lock().map_err(|e| e.to_string())?;
    Ok(store.list(viewer.as_ref(), filter))
}

#[tauri::command]
pub fn create_file(
    file: NewFile,
    state: State<Mutex<Shell>>,
    files: State<FileStoreState>,
) -> Result<FileRecord, String> {
    let owner = current_user(&state)?.ok_or_else(|| "Not authorized".to_string())?;
    let mut store = files.0.lock().map_err(|e| e.to_string())?;
    store.create(&owner, file).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_file(
    id: String,
    content: String,
    is_public: Option<bool>,
    files: State<FileStoreState>,
) -> Result<FileRecord, String> {
    let id = parse_file_id(&id)?;
    let mut store = files.0.lock().map_err(|e| e.to_string())?;
    store.update(id, content, is_public).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_file(id: String, files: State<FileStoreState>) -> Result<(), String> {
    let id = parse_file_id(&id)?;
    let mut store = files.0.lock().map_err(|e| e.to_string())?;
    store.delete(id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn restore_file(id: String, files: State<FileStoreState>) -> Result<FileRecord, String> {
    let id = parse_file_id(&id)?;
    let mut store = files.0.lock().map_err(|e| e.to_string())?;
    store.restore(id).map_err(|e| e.to_string())
}
