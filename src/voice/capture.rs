use std::{
    panic::{
        self,
        AssertUnwindSafe,
    },
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        Arc,
    },
    time::Duration,
};

use super::transcriber::Transcriber;
use crate::core::errors::VoiceError;

/// Admission gate for voice capture: at most one capture may be in
/// flight per process. Cloneable handle over one shared flag.
#[derive(Clone, Default)]
pub struct CaptureGate {
    listening: Arc<AtomicBool>,
}

impl CaptureGate {
    pub fn new() -> Self {
        Self { listening: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Acquires the gate, or returns None when a capture is already in
    /// flight. The returned guard clears the flag when dropped, so the
    /// flag's lifetime is exactly the capture attempt.
    pub fn try_begin(&self) -> Option<CaptureGuard> {
        let acquired = self
            .listening
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if acquired {
            Some(CaptureGuard { listening: Arc::clone(&self.listening) })
        } else {
            None
        }
    }
}

pub struct CaptureGuard {
    listening: Arc<AtomicBool>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
    }
}

/// Runs one capture attempt under the gate. The guard is held across the
/// transcriber call and dropped on every exit path, including a panicking
/// transcriber (mapped to VoiceError::Unknown).
pub fn capture(
    gate: &CaptureGate,
    transcriber: &dyn Transcriber,
    timeout: Duration,
    calibration: Duration,
) -> Result<String, VoiceError> {
    let _guard = gate
        .try_begin()
        .ok_or_else(|| VoiceError::Unknown("another capture is already in progress".to_string()))?;

    let result = panic::catch_unwind(AssertUnwindSafe(|| transcriber.listen(timeout, calibration)));

    match result {
        Ok(listen_result) => listen_result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "capture aborted unexpectedly".to_string());

            Err(VoiceError::Unknown(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticTranscriber(Result<String, VoiceError>);

    impl Transcriber for StaticTranscriber {
        fn listen(&self, _timeout: Duration, _calibration: Duration) -> Result<String, VoiceError> {
            self.0.clone()
        }
    }

    struct PanickingTranscriber;

    impl Transcriber for PanickingTranscriber {
        fn listen(&self, _timeout: Duration, _calibration: Duration) -> Result<String, VoiceError> {
            panic!("microphone exploded");
        }
    }

    fn run(gate: &CaptureGate, t: &dyn Transcriber) -> Result<String, VoiceError> {
        capture(gate, t, Duration::from_secs(5), Duration::from_millis(500))
    }

    #[test]
    fn success_returns_transcript_and_clears_flag() {
        let gate = CaptureGate::new();
        let transcriber = StaticTranscriber(Ok("120".to_string()));

        assert_eq!(run(&gate, &transcriber), Ok("120".to_string()));
        assert!(!gate.is_listening());
    }

    #[test]
    fn every_error_kind_clears_flag() {
        let gate = CaptureGate::new();

        for error in
            [VoiceError::Timeout, VoiceError::Unrecognized, VoiceError::ServiceUnavailable]
        {
            let transcriber = StaticTranscriber(Err(error.clone()));
            assert_eq!(run(&gate, &transcriber), Err(error));
            assert!(!gate.is_listening());
        }
    }

    #[test]
    fn panicking_transcriber_clears_flag_and_maps_to_unknown() {
        let gate = CaptureGate::new();

        let result = run(&gate, &PanickingTranscriber);
        assert_eq!(result, Err(VoiceError::Unknown("microphone exploded".to_string())));
        assert!(!gate.is_listening());
    }

    #[test]
    fn second_capture_is_rejected_while_gate_is_held() {
        let gate = CaptureGate::new();
        let _guard = gate.try_begin().unwrap();
        assert!(gate.is_listening());

        let transcriber = StaticTranscriber(Ok("should not run".to_string()));
        assert!(matches!(run(&gate, &transcriber), Err(VoiceError::Unknown(_))));

        // Rejection must not release the original holder's flag.
        assert!(gate.is_listening());
    }

    #[test]
    fn gate_is_reusable_after_guard_drop() {
        let gate = CaptureGate::new();
        drop(gate.try_begin().unwrap());
        assert!(gate.try_begin().is_some());
    }
}
