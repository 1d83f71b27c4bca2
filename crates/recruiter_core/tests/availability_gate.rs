use std::sync::Once;

use recruiter_core::messages::CHAT_PLACEHOLDER;
use recruiter_core::{update, AppState, Effect, Msg, SourceKind};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn edit(state: AppState, source: SourceKind, text: &str) -> AppState {
    update(
        state,
        Msg::SourceEdited {
            source,
            text: text.to_string(),
        },
    )
    .0
}

#[test]
fn fresh_session_shows_placeholder_and_disables_chat() {
    init_logging();
    let view = AppState::new().view();
    assert!(!view.chat.input_enabled);
    assert!(!view.chat.send_enabled);
    assert_eq!(view.chat.placeholder, Some(CHAT_PLACEHOLDER));
    assert!(view.chat.entries.is_empty());
}

#[test]
fn any_single_trimmed_source_enables_chat() {
    init_logging();
    for source in SourceKind::ALL {
        let state = edit(AppState::new(), source, "   \n  ");
        assert!(!state.view().chat.input_enabled, "{source:?} whitespace");

        let state = edit(state, source, "  text ");
        let view = state.view();
        assert!(view.chat.input_enabled, "{source:?} present");
        assert!(view.chat.send_enabled);
    }
}

#[test]
fn clearing_every_source_resets_window_but_keeps_history() {
    init_logging();
    let state = edit(AppState::new(), SourceKind::Transcript, "call notes");
    let (state, _) = update(state, Msg::ChatInputChanged("rate?".to_string()));
    let (state, effects) = update(state, Msg::SendClicked);
    assert_eq!(effects.len(), 1);
    let (state, _) = update(state, Msg::ChatReplied(Ok("50/h".to_string())));
    assert_eq!(state.view().chat.entries.len(), 2);
    let epoch_before = state.view().chat.epoch;

    let state = edit(state, SourceKind::Transcript, "");
    let view = state.view();
    assert!(!view.chat.input_enabled);
    assert!(view.chat.entries.is_empty());
    assert_eq!(view.chat.placeholder, Some(CHAT_PLACEHOLDER));
    assert_eq!(view.chat.epoch, epoch_before + 1);
    assert_eq!(state.chat_history().len(), 2);
}

#[test]
fn commit_without_change_rechecks_gate() {
    init_logging();
    let mut state = AppState::new();
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(state, Msg::SourceCommitted(SourceKind::JobDescription));
    assert!(effects.is_empty());
    // Nothing visible changed, so there is nothing to render.
    assert!(!state.consume_dirty());
    assert!(!state.view().chat.input_enabled);
}

#[test]
fn editing_extracted_content_counts_as_web_source() {
    init_logging();
    let state = edit(AppState::new(), SourceKind::WebContent, "pasted resume");
    let view = state.view();
    assert!(view.chat.input_enabled);
    assert_eq!(view.analyze.extracted_content, "pasted resume");
    assert_eq!(view.sources.web_content, "pasted resume");
    assert_eq!(state.sources().web_content(), "pasted resume");
    // Only analysis fills the content chat sends as the document.
    assert_eq!(state.analyzed_content(), "");
}

#[test]
fn edits_after_analysis_leave_the_analyzed_content_alone() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::UrlChanged("https://example.com".to_string()));
    let (state, _) = update(state, Msg::AnalyzeClicked);
    let (state, _) = update(state, Msg::AnalyzeFinished(Ok("Hello world".to_string())));
    assert_eq!(state.analyzed_content(), "Hello world");

    let state = edit(state, SourceKind::WebContent, "Hello world, edited");
    assert_eq!(state.sources().web_content(), "Hello world, edited");
    assert_eq!(state.analyzed_content(), "Hello world");

    let (state, _) = update(state, Msg::ChatInputChanged("summarize".to_string()));
    let (_, effects) = update(state, Msg::SendClicked);
    let [Effect::SendChat(request)] = effects.as_slice() else {
        panic!("expected one chat request, got {effects:?}");
    };
    assert_eq!(request.document_content, "Hello world");
}
