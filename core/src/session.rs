use crate::*;

/// Proof that a board load was started; handed back to [`GameSession::finish_load`] with the result.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: LoadGeneration,
}

impl LoadTicket {
    pub fn generation(&self) -> LoadGeneration {
        self.generation
    }
}

#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// The board is now the current one.
    Installed,
    /// The load failed and no board is shown.
    Failed(BoardError),
    /// A newer load superseded this one; its result was dropped.
    Stale,
}

/// Owner of the current board and of the load generation counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    board: Option<Board>,
    generation: LoadGeneration,
    loading: bool,
    last_error: Option<BoardError>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn generation(&self) -> LoadGeneration {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&BoardError> {
        self.last_error.as_ref()
    }

    /// Starts a new game unless one is already loading.
    ///
    /// The previous board is dropped right away, cells rendered for it stop resolving.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.loading {
            log::debug!("load {} still running, start ignored", self.generation);
            return None;
        }
        Some(self.restart_load())
    }

    /// Starts a new game even if a load is running; that load's result will come back stale.
    pub fn restart_load(&mut self) -> LoadTicket {
        if self.loading {
            log::debug!("load {} superseded", self.generation);
        }
        self.generation = self.generation.next();
        self.loading = true;
        self.board = None;
        self.last_error = None;
        log::debug!("load {} started", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Board>) -> LoadOutcome {
        if !self.loading || ticket.generation != self.generation {
            log::debug!(
                "discarding result of load {}, current is {}",
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(board) => {
                log::debug!(
                    "load {} installed {}x{} board",
                    self.generation,
                    board.columns(),
                    board.rows()
                );
                self.board = Some(board);
                LoadOutcome::Installed
            }
            Err(err) => {
                log::warn!("load {} failed: {}", self.generation, err);
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Reference to a cell of the current board, whether or not a clue exists there.
    pub fn clue_ref(&self, column: usize, row: usize) -> ClueRef {
        ClueRef::new(self.generation, column, row)
    }

    fn resolve(&self, clue_ref: ClueRef) -> Result<&Clue> {
        self.board
            .as_ref()
            .filter(|_| clue_ref.generation == self.generation)
            .and_then(|board| board.clue(clue_ref.column, clue_ref.row))
            .ok_or(BoardError::InvalidReference(clue_ref))
    }

    pub fn clue(&self, clue_ref: ClueRef) -> Result<&Clue> {
        self.resolve(clue_ref)
    }

    pub fn display_text(&self, clue_ref: ClueRef) -> Result<&str> {
        Ok(self.resolve(clue_ref)?.display_text())
    }

    pub fn reveal(&mut self, clue_ref: ClueRef) -> Result<RevealOutcome> {
        if clue_ref.generation != self.generation {
            return Err(BoardError::InvalidReference(clue_ref));
        }
        let outcome = self
            .board
            .as_mut()
            .and_then(|board| board.reveal(clue_ref.column, clue_ref.row))
            .ok_or(BoardError::InvalidReference(clue_ref))?;
        log::trace!("reveal {}: {:?}", clue_ref, outcome);
        Ok(outcome)
    }
}
