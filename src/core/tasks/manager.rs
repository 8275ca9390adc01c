use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use tokio::runtime::Runtime;

use super::types::TaskResult;
use crate::{
    classifier::ClassifierSet,
    voice::{
        self,
        playback,
        CaptureGate,
        Synthesizer,
        Transcriber,
        DEFAULT_LANGUAGE,
    },
};

/// Runs the blocking work (model loading, the ~5 s listen window, speech
/// playback) off the UI thread. Results come back over an mpsc channel
/// the GUI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_classifiers(&self) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Loading models...".to_string()));

            let result = runtime.block_on(async {
                let set = ClassifierSet::load_all().map_err(|e| e.to_string())?;
                Ok::<Arc<ClassifierSet>, String>(Arc::new(set))
            });

            let _ = sender.send(TaskResult::ClassifiersLoaded(result));
        });
    }

    /// One voice capture attempt for the named field. The gate is
    /// acquired inside `voice::capture`, so a concurrent request is
    /// rejected there and the listening flag is released on every exit
    /// path of the worker thread.
    pub fn capture_voice(
        &self,
        key: String,
        gate: CaptureGate,
        transcriber: Arc<dyn Transcriber>,
        timeout: Duration,
        calibration: Duration,
    ) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = voice::capture(&gate, transcriber.as_ref(), timeout, calibration);

            let _ = sender.send(TaskResult::VoiceCapture { key, result });
        });
    }

    /// Best-effort speech: synthesize then play. The workflow never
    /// waits on this and treats failure as a notice, not an error.
    pub fn speak(&self, text: String, synthesizer: Arc<dyn Synthesizer>) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = synthesizer
                .synthesize(&text, DEFAULT_LANGUAGE)
                .map_err(|e| e.to_string())
                .and_then(|bytes| playback::play_mp3(&bytes).map_err(|e| e.to_string()));

            let _ = sender.send(TaskResult::SpeechFinished(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
