use crate::*;

/// Audio cues the frontend may play on state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Click,
    Flag,
    Reveal,
    Win,
    Lose,
}

/// End-of-game banner kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Win,
    Lose,
}

/// Seam towards the rendering/audio layer. Every method is fire-and-forget
/// with a no-op default: the core never waits on a UI call and never sees
/// a UI failure.
pub trait GameUi {
    fn render(&mut self, _session: &GameSession) {}
    fn cue(&mut self, _cue: AudioCue) {}
    fn announce(&mut self, _message: &str, _banner: Banner) {}
}

/// Headless collaborator.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullUi;

impl GameUi for NullUi {}

/// Player input with the raw event layer stripped away.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal { row: Axis, col: Axis },
    ToggleMark { row: Axis, col: Axis },
    SetMarkMode(MarkMode),
    NewGame(Difficulty),
}

/// Applies one command to the session, forwards the matching cues, and
/// triggers a full re-render. `NewGame` replaces the session wholesale.
pub fn dispatch(
    session: &mut GameSession,
    command: Command,
    ui: &mut impl GameUi,
) -> Result<()> {
    match command {
        Command::Reveal { row, col } => {
            let pos = session.board().validate((row, col))?;
            let was_open = session.cell_at(pos).is_open();
            match session.reveal(pos)? {
                // cue only when the click actually opened something
                RevealOutcome::Continue => {
                    if !was_open && session.cell_at(pos).is_open() {
                        ui.cue(AudioCue::Reveal);
                    }
                }
                RevealOutcome::Won => {
                    ui.cue(AudioCue::Win);
                    ui.announce("you cleared the board", Banner::Win);
                }
                RevealOutcome::Lost => {
                    ui.cue(AudioCue::Lose);
                    ui.announce("you hit a mine", Banner::Lose);
                }
            }
        }
        Command::ToggleMark { row, col } => {
            if session.toggle_mark((row, col))?.has_update() {
                ui.cue(match session.mark_mode() {
                    MarkMode::Flag => AudioCue::Flag,
                    MarkMode::Tag => AudioCue::Click,
                });
            }
        }
        Command::SetMarkMode(mode) => {
            session.set_mark_mode(mode);
            ui.cue(AudioCue::Click);
        }
        Command::NewGame(difficulty) => {
            *session = GameSession::new_game(difficulty)?;
            ui.cue(AudioCue::Click);
        }
    }
    ui.render(session);
    Ok(())
}
