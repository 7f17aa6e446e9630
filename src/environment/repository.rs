use super::types::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const SESSION_PATH: &str = "session.json";

/// Disk-backed session storage. Read once at startup; the signed-in flag
/// everywhere else derives from what was found here.
#[derive(Clone)]
pub struct Repository {
    session: Arc<Mutex<Option<Session>>>,
}

impl Repository {
    pub fn new() -> Self {
        let session: Option<Session> = read(SESSION_PATH).ok().flatten();

        // Try to write the session back. Otherwise fail early
        write(SESSION_PATH, &session).expect("Expect to be able to write the session file");

        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    /// Forget the stored session. The next start comes up signed out.
    pub fn clear_session(&self) -> Result<(), String> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Session Data Error: {e:?}"))?;
        *session = None;
        if let Err(e) = write(SESSION_PATH, &*session) {
            log::error!("Could not save session: {e:?}");
        }
        Ok(())
    }
}

fn read<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    let data_path = data_directory().join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(name: &str, value: &T) -> Result<(), String> {
    let data_path = data_directory().join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not serialize value: {e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> PathBuf {
    use directories_next::ProjectDirs;
    if let Some(proj_dirs) = ProjectDirs::from("com", "takibi", "takibi") {
        let dirs = proj_dirs.config_dir().to_path_buf();
        if !dirs.exists() {
            if let Err(e) = std::fs::create_dir_all(&dirs) {
                log::error!("Could not create directory {}: {e:?}", dirs.display());
                panic!("Couldn't find a folder to save data")
            }
        }
        dirs
    } else {
        panic!("Couldn't find a folder to save data")
    }
}
