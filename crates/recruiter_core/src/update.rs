use engine_logging::{engine_debug, engine_warn};

use crate::effect::{AnalyzeRequest, ChatRequest, GenerateRequest, COPY_FEEDBACK_DURATION};
use crate::{messages, AppState, DocumentKind, Effect, Msg, RequestFailure};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::SelectorChanged(text) => {
            state.set_selector_input(text);
            Vec::new()
        }
        Msg::SourceEdited { source, text } => {
            state.set_source(source, text);
            state.refresh_chat_availability();
            Vec::new()
        }
        Msg::SourceCommitted(_) => {
            state.refresh_chat_availability();
            Vec::new()
        }
        Msg::ChatInputChanged(text) => {
            state.set_chat_input(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => start_analysis(&mut state),
        Msg::AnalyzeFinished(result) => {
            finish_analysis(&mut state, result);
            Vec::new()
        }
        Msg::SendClicked => send_chat(&mut state),
        Msg::ChatReplied(result) => {
            finish_chat(&mut state, result);
            Vec::new()
        }
        Msg::GenerateClicked(kind) => start_generation(&mut state, kind),
        Msg::DocumentGenerated { kind, result } => {
            finish_generation(&mut state, kind, result);
            Vec::new()
        }
        Msg::CopyClicked(kind) => {
            let text = state.document_markdown(kind);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Effect::CopyToClipboard {
                    kind,
                    text: text.to_string(),
                }]
            }
        }
        Msg::CopyFinished { kind, result } => match result {
            Ok(()) => {
                let token = state.mark_copied(kind);
                vec![Effect::ScheduleCopyReset {
                    kind,
                    token,
                    after: COPY_FEEDBACK_DURATION,
                }]
            }
            Err(err) => {
                engine_warn!("Clipboard write for {:?} failed: {}", kind, err);
                let text = state.document_markdown(kind).to_string();
                if !text.is_empty() {
                    state.open_manual_copy(kind, text);
                }
                Vec::new()
            }
        },
        Msg::CopyFeedbackExpired { kind, token } => {
            state.restore_copy_label(kind, token);
            Vec::new()
        }
        Msg::ManualCopyDismissed => {
            state.close_manual_copy();
            Vec::new()
        }
    };

    (state, effects)
}

fn start_analysis(state: &mut AppState) -> Vec<Effect> {
    if state.analyze_in_flight() {
        engine_debug!("Analyze ignored: a request is already in flight");
        return Vec::new();
    }

    let url = state.url_input().trim().to_string();
    let selector = state.selector_input().trim().to_string();
    if url.is_empty() {
        state.set_analyze_error(messages::ENTER_URL);
        return Vec::new();
    }

    state.begin_analysis();
    state.refresh_chat_availability();
    vec![Effect::Analyze(AnalyzeRequest { url, selector })]
}

fn finish_analysis(state: &mut AppState, result: Result<String, RequestFailure>) {
    if !state.analyze_in_flight() {
        engine_debug!("Dropping analyze result with no request in flight");
        return;
    }
    match result {
        Ok(content) => state.complete_analysis(content),
        Err(failure) => state.fail_analysis(&failure.message),
    }
    state.refresh_chat_availability();
}

fn send_chat(state: &mut AppState) -> Vec<Effect> {
    let message = state.chat_input().trim().to_string();
    if message.is_empty() {
        return Vec::new();
    }
    if state.chat_in_flight() {
        engine_debug!("Send ignored: waiting for the previous reply");
        return Vec::new();
    }
    // The gate may have been bypassed, so check the sources again.
    if !state.sources().any_present() {
        state.set_chat_error(messages::CHAT_NEEDS_SOURCE);
        return Vec::new();
    }

    state.begin_chat(message);

    let sources = state.sources();
    let request = ChatRequest {
        history: state.chat_history().turns().to_vec(),
        document_content: state.analyzed_content().to_string(),
        transcript_content: sources.transcript().trim().to_string(),
        job_content: sources.job_description().trim().to_string(),
    };
    vec![Effect::SendChat(request)]
}

fn finish_chat(state: &mut AppState, result: Result<String, RequestFailure>) {
    if !state.chat_in_flight() {
        engine_debug!("Dropping chat reply with no request in flight");
        return;
    }
    match result {
        Ok(reply) => state.complete_chat(reply),
        Err(failure) => state.fail_chat(&failure.message),
    }
}

fn start_generation(state: &mut AppState, kind: DocumentKind) -> Vec<Effect> {
    if state.document(kind).status.in_flight {
        engine_debug!("Generate {:?} ignored: a request is already in flight", kind);
        return Vec::new();
    }

    let sources = state.sources();
    let transcript = sources.transcript().trim().to_string();
    let job_description = sources.job_description().trim().to_string();
    let extracted_content = sources.web_content().trim().to_string();

    let missing = match (transcript.is_empty(), job_description.is_empty()) {
        (true, true) => Some(kind.missing_both_message()),
        (true, false) => Some(kind.missing_transcript_message()),
        (false, true) => Some(kind.missing_job_description_message()),
        (false, false) => None,
    };
    if let Some(message) = missing {
        state.document_mut(kind).status.report(message);
        return Vec::new();
    }

    let profile_url = match kind {
        DocumentKind::TalentSummary => None,
        DocumentKind::SubmissionTemplate => Some(state.url_input().trim().to_string()),
    };

    state.begin_generation(kind);
    vec![Effect::Generate {
        kind,
        request: GenerateRequest {
            extracted_content,
            transcript,
            job_description,
            profile_url,
        },
    }]
}

fn finish_generation(
    state: &mut AppState,
    kind: DocumentKind,
    result: Result<String, RequestFailure>,
) {
    if !state.document(kind).status.in_flight {
        engine_debug!("Dropping {:?} result with no request in flight", kind);
        return;
    }
    match result {
        Ok(markdown) => state.complete_generation(kind, markdown),
        Err(failure) => state.fail_generation(kind, &failure.message),
    }
}
