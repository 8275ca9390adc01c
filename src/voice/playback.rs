use std::{
    fs,
    process::{
        Command,
        Stdio,
    },
};

use crate::core::errors::MediVoiceError;

/// Plays synthesized audio through an mpv subprocess. Blocks until
/// playback ends, so call this from a task thread, not the UI thread.
pub fn play_mp3(bytes: &[u8]) -> Result<(), MediVoiceError> {
    let path = std::env::temp_dir().join("medivoice_tts.mp3");
    fs::write(&path, bytes)?;

    let status = Command::new("mpv")
        .arg("--no-video")
        .arg("--really-quiet")
        .arg(&path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| MediVoiceError::Playback(format!("failed to launch mpv: {}", e)))?;

    let _ = fs::remove_file(&path);

    if !status.success() {
        return Err(MediVoiceError::Playback(format!("mpv exited with {}", status)));
    }

    Ok(())
}
