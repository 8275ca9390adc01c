use eframe::egui;
use medivoice::gui::MediVoiceApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 640.0])
            .with_min_inner_size([560.0, 420.0])
            .with_title("MediVoice"),
        ..Default::default()
    };

    eframe::run_native(
        "MediVoice",
        options,
        Box::new(|cc| Ok(Box::new(MediVoiceApp::new(cc)))),
    )
}
