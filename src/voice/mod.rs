pub mod capture;
pub mod playback;
pub mod synthesizer;
pub mod transcriber;

pub use capture::{
    capture,
    CaptureGate,
    CaptureGuard,
};
pub use synthesizer::{
    HttpSynthesizer,
    Synthesizer,
    DEFAULT_LANGUAGE,
};
pub use transcriber::{
    HttpTranscriber,
    Transcriber,
};
