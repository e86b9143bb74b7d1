//! Japanese text-to-speech through the webview's `speechSynthesis`.

use dioxus::document::eval;

/// Build the script that reads `text` aloud, interrupting anything still speaking.
///
/// The text is embedded as a JSON string literal so quotes and newlines survive.
#[must_use]
pub fn speak_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function() {{
            const synth = window.speechSynthesis;
            if (!synth) return;
            if (synth.speaking) {{
                synth.cancel();
            }}
            const utterance = new SpeechSynthesisUtterance({literal});
            utterance.lang = "ja-JP";
            utterance.rate = 0.9;
            synth.speak(utterance);
        }})();"#
    )
}

/// Speak `text`; silently does nothing when speech is unavailable.
pub fn speak(text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let _ = eval(&speak_script(text));
}
