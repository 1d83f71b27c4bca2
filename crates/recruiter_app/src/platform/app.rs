use std::fs;
use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use recruiter_core::{update, AppState, AppViewModel, DocumentKind, Msg};
use recruiter_engine::ReqwestBackend;

use super::clipboard::Osc52Clipboard;
use super::config::Args;
use super::effects::EffectRunner;
use super::ui::constants::{BANNER, ENTRY_HINT, HELP};
use super::ui::input::{edit_source, InputAction, InputParser, ShowTarget};
use super::ui::render::TerminalRenderer;

/// Everything the event loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    Core(Msg),
    InputClosed,
}

pub fn run_app(args: Args) -> Result<()> {
    let _ = engine_logging::initialize(args.log_destination(), args.level_filter());

    let settings = args.backend_settings()?;
    engine_info!(
        "Starting recruiter backend={} timeout={:?}",
        settings.base_url,
        settings.request_timeout
    );
    let backend = ReqwestBackend::new(settings).context("creating HTTP client")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(
        Arc::new(backend),
        Arc::new(Osc52Clipboard),
        event_tx.clone(),
    );
    spawn_stdin_reader(event_tx);

    let mut session = Session::new(runner);
    session.run(event_rx);
    engine_info!("Session ended");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    engine_warn!("Reading terminal input failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Session {
    state: AppState,
    parser: InputParser,
    renderer: TerminalRenderer,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let renderer = TerminalRenderer::new(&state.view());
        Self {
            state,
            parser: InputParser::new(),
            renderer,
            runner,
        }
    }

    fn run(&mut self, events: mpsc::Receiver<AppEvent>) {
        print_lines(&[BANNER.to_string()]);
        print_lines(&self.renderer.intro(&self.state.view()));

        let mut input_closed = false;
        while let Ok(event) = events.recv() {
            match event {
                AppEvent::Line(line) => {
                    if self.handle_line(&line) == Flow::Quit {
                        return;
                    }
                }
                AppEvent::Core(msg) => self.dispatch(msg),
                AppEvent::InputClosed => input_closed = true,
            }
            // Piped input ends before the replies arrive; wait for them.
            if input_closed && !self.state.has_pending_requests() {
                return;
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        if self.state.manual_copy_open() {
            self.dispatch(Msg::ManualCopyDismissed);
            return Flow::Continue;
        }

        let was_collecting = self.parser.collecting().is_some();
        match self.parser.parse_line(line) {
            InputAction::Dispatch(msgs) => self.dispatch_all(msgs),
            InputAction::Collecting(source) => {
                if !was_collecting {
                    println!("Enter {} {}", source.label(), ENTRY_HINT);
                }
            }
            InputAction::Load { source, path } => {
                let loaded = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()));
                match loaded {
                    Ok(text) => {
                        if let InputAction::Dispatch(msgs) = edit_source(source, text) {
                            self.dispatch_all(msgs);
                        }
                    }
                    Err(err) => {
                        engine_warn!("Load {:?} failed: {:#}", source, err);
                        println!("[Load] {err:#}");
                    }
                }
            }
            InputAction::Show(target) => print_lines(&self.show_lines(target)),
            InputAction::Status => {
                print_lines(&self.renderer.status_lines(&self.state.view()));
            }
            InputAction::Help => println!("{HELP}"),
            InputAction::Quit => return Flow::Quit,
            InputAction::Invalid(message) => println!("{message}"),
            InputAction::Ignore => {}
        }
        Flow::Continue
    }

    fn dispatch_all(&mut self, msgs: Vec<Msg>) {
        for msg in msgs {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            let view = self.state.view();
            print_lines(&self.renderer.render(&view));
        }
    }

    fn show_lines(&self, target: ShowTarget) -> Vec<String> {
        let view = self.state.view();
        match target {
            ShowTarget::Extracted => vec![extracted_text(&view)],
            ShowTarget::Document(kind) => self.document_or_empty(&view, kind),
            ShowTarget::All => DocumentKind::ALL
                .iter()
                .flat_map(|kind| self.document_or_empty(&view, *kind))
                .collect(),
        }
    }

    fn document_or_empty(&self, view: &AppViewModel, kind: DocumentKind) -> Vec<String> {
        let lines = self.renderer.document_lines(view.document(kind));
        if lines.is_empty() {
            vec![format!("{}: nothing generated yet", kind.title())]
        } else {
            lines
        }
    }
}

fn extracted_text(view: &AppViewModel) -> String {
    if view.analyze.extracted_content.is_empty() {
        "Web Content: empty".to_string()
    } else {
        view.analyze.extracted_content.clone()
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
