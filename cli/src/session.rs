use minesweep_core::{
    self as game, BoardView, CellPicker, Coord2, FlagOutcome, GameConfig, Minefield,
};
use std::fmt;

/// Which kind of activation the player made on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Click {
    /// Reveal
    Primary,
    /// Flag or unflag
    Secondary,
}

/// Short-lived message shown instead of the regular status text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Notice {
    NoMarksLeft,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMarksLeft => f.write_str("No marks left"),
        }
    }
}

/// The single board the terminal plays on, plus the picker used to lay out new games.
pub(crate) struct Session<P> {
    field: Minefield,
    picker: P,
    notice: Option<Notice>,
}

impl<P: CellPicker> Session<P> {
    pub(crate) fn new(config: GameConfig, mut picker: P) -> Self {
        let field = Minefield::generate(config, &mut picker);
        Self::from_field(field, picker)
    }

    pub(crate) fn from_field(field: Minefield, picker: P) -> Self {
        Self {
            field,
            picker,
            notice: None,
        }
    }

    pub(crate) fn field(&self) -> &Minefield {
        &self.field
    }

    pub(crate) fn new_game(&mut self) {
        self.field.regenerate(&mut self.picker);
        self.notice = None;
        log::info!("New game started");
    }

    /// Applies one activation, starting a new game first if the current one is over.
    ///
    /// Any activation restarts a finished game, even one that misses the board.
    /// Returns whether the board needs to be redrawn.
    pub(crate) fn click(&mut self, coords: Coord2, click: Click) -> game::Result<bool> {
        let restarted = self.field.is_finished();
        if restarted {
            self.new_game();
        }

        let index = self.field.index_of(coords)?;

        let had_notice = self.notice.take().is_some();
        let updated = match click {
            Click::Primary => self.field.reveal(index)?.has_update(),
            Click::Secondary => match self.field.toggle_flag(index)? {
                FlagOutcome::NoFlagsLeft => {
                    self.notice = Some(Notice::NoMarksLeft);
                    true
                }
                outcome => outcome.has_update(),
            },
        };
        log::debug!("{:?} at {:?}, updated: {}", click, coords, updated);

        Ok(restarted || had_notice || updated)
    }

    pub(crate) fn status_line(&self) -> String {
        match self.notice {
            Some(notice) => notice.to_string(),
            None => self.field.status_text(),
        }
    }

    pub(crate) fn view(&self) -> BoardView {
        let mut view = self.field.view();
        view.status_text = self.status_line();
        view
    }
}
