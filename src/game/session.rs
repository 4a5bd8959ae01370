//! Chess session: the game state machine
//!
//! [`ChessSession`] owns the board and everything that hangs off it: whose
//! turn it is, pending promotion, selection, captured pieces, game status and
//! the AI opponent. All mutation goes through its methods; rejected calls
//! return a [`GameError`] and change nothing.
//!
//! # Turn Flow
//!
//! ```text
//! new_game ──► Playing ──submit_move / AI reply──► Playing ...
//!                 │
//!                 └──► Checkmate / Stalemate / Draw / Resigned (terminal)
//! ```
//!
//! In AI mode, whenever the AI's colour is to move the session schedules a
//! search and reports busy until the host delivers the reply with
//! [`ChessSession::poll_ai`] or [`ChessSession::wait_for_ai`].
//!
//! # Generations
//!
//! Each `new_game` bumps the session generation. AI replies carry the
//! generation they were scheduled under and are dropped when it no longer
//! matches, so a search started for an abandoned game can never move a piece
//! in the new one. Undo does not bump the generation; it is refused while
//! the AI is busy instead, so at most one reply per generation is ever
//! outstanding.

use crate::core::config::SessionConfig;
use crate::game::ai::{search_job, AiReply, AiRunner, GameMode, GameSettings, PlayerColor, ThreadRunner};
use crate::game::error::{GameError, GameResult};
use crate::game::events::{GameEvent, OutcomeEvent, PlayerResult};
use crate::game::feedback::{random_message, MessageKind, GOOD_MOVE_CHANCE};
use crate::game::resources::{
    piece_symbol, side_name, CapturedPieces, GameStatus, PendingPromotion, Selection,
};
use crate::progress::{ProgressStats, ProgressTracker};
use chess_engine::board::reaches_last_rank;
use chess_engine::{
    board_state, AppliedMove, Board, BoardState, Difficulty, DrawReason, MoveSpec, PieceKind,
    Side, Square,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Optional overrides for [`ChessSession::new_game`]
///
/// Missing values fall back to the session's current preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewGameOptions {
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub player_color: Option<PlayerColor>,
}

impl NewGameOptions {
    pub fn mode(mode: GameMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    fn resolve(self, preferences: GameSettings) -> GameSettings {
        GameSettings {
            mode: self.mode.unwrap_or(preferences.mode),
            difficulty: self.difficulty.unwrap_or(preferences.difficulty),
            player_color: self.player_color.unwrap_or(preferences.player_color),
        }
    }
}

/// What a successful move submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The move is on the board
    Applied(AppliedMove),
    /// Pawn reached the last rank; nothing played until a piece is chosen
    PromotionPending(PendingPromotion),
}

/// What a square click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareClick {
    /// Own piece selected; its legal destinations are now highlighted
    Selected { square: Square, destinations: Vec<Square> },
    /// Selection cleared
    Cleared,
    /// Clicked a highlighted destination, so the move was submitted
    Moved(SubmitOutcome),
}

/// Read-only snapshot for display and serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub fen: String,
    pub status: GameStatus,
    pub turn: PlayerColor,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_color: PlayerColor,
    pub is_ai_thinking: bool,
    pub selected_square: Option<String>,
    pub legal_moves: Vec<String>,
    pub pending_promotion: Option<(String, String)>,
    pub last_move: Option<(String, String)>,
    pub king_in_check: Option<String>,
    pub captured_by_white: String,
    pub captured_by_black: String,
    pub material_advantage: i32,
    pub ply_count: usize,
    pub generation: u64,
    pub status_text: String,
    pub message: Option<String>,
}

/// One chess game at a time, plus the settings and progress that outlive it
pub struct ChessSession {
    board: Board,
    preferences: GameSettings,
    active: GameSettings,
    status: GameStatus,
    winner: Option<Side>,
    generation: u64,
    ai_busy: bool,
    pending_promotion: Option<PendingPromotion>,
    selection: Selection,
    captured: CapturedPieces,
    message: Option<String>,
    events: Vec<GameEvent>,
    progress: ProgressTracker,
    runner: Box<dyn AiRunner>,
    replies_tx: Sender<AiReply>,
    replies_rx: Receiver<AiReply>,
    rng: StdRng,
}

impl ChessSession {
    /// Session whose AI searches on a background thread after the configured
    /// think delay
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_runner(config, Box::new(ThreadRunner::new(config.think_delay())))
    }

    /// Session using a caller-supplied AI runner
    ///
    /// No game is started; call [`ChessSession::new_game`] first. Until then
    /// the session holds a fresh board in the default settings.
    pub fn with_runner(config: &SessionConfig, runner: Box<dyn AiRunner>) -> Self {
        let (replies_tx, replies_rx) = unbounded();
        let rng = match config.ai_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            board: Board::new(),
            preferences: GameSettings::default(),
            active: GameSettings::default(),
            status: GameStatus::Playing,
            winner: None,
            generation: 0,
            ai_busy: false,
            pending_promotion: None,
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            message: None,
            events: Vec::new(),
            progress: ProgressTracker::default(),
            runner,
            replies_tx,
            replies_rx,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Game control
    // ------------------------------------------------------------------

    /// Start a fresh game
    ///
    /// Resets the board, clears promotion, selection and AI-busy, and bumps
    /// the generation so any outstanding AI reply is ignored. If the AI moves
    /// first, its search is scheduled right away.
    pub fn new_game(&mut self, options: NewGameOptions) {
        self.start(options, Board::new());
    }

    /// Start a game from a FEN position instead of the initial setup
    ///
    /// An invalid FEN is rejected before anything changes. A position that
    /// is already decided starts out in its terminal status, without an
    /// outcome event.
    pub fn new_game_from_fen(&mut self, options: NewGameOptions, fen: &str) -> GameResult<()> {
        let board = Board::from_fen(fen)?;
        self.start(options, board);
        Ok(())
    }

    fn start(&mut self, options: NewGameOptions, board: Board) {
        let settings = options.resolve(self.preferences);
        self.preferences = settings;
        self.active = settings;

        self.board = board;
        self.generation += 1;
        self.status = GameStatus::Playing;
        self.winner = None;
        self.ai_busy = false;
        self.pending_promotion = None;
        self.selection.clear();
        self.captured.clear();
        self.message = None;

        info!(
            "[SESSION] New game #{}: mode={} difficulty={} player={}",
            self.generation, settings.mode, settings.difficulty, settings.player_color
        );

        match board_state(&self.board) {
            BoardState::Checkmate { winner } => {
                self.status = GameStatus::Checkmate;
                self.winner = Some(winner);
            }
            BoardState::Draw(DrawReason::Stalemate) => self.status = GameStatus::Stalemate,
            BoardState::Draw(_) => self.status = GameStatus::Draw,
            BoardState::Playing { .. } => {
                if self.is_ai_turn() {
                    self.schedule_ai();
                }
            }
        }
    }

    /// Difficulty for the next new game
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("[SETTINGS] Difficulty set to {}", difficulty);
        self.preferences.difficulty = difficulty;
    }

    /// Mode for the next new game
    pub fn set_mode(&mut self, mode: GameMode) {
        info!("[SETTINGS] Game mode set to {}", mode);
        self.preferences.mode = mode;
    }

    /// Human colour for the next new game
    pub fn set_player_color(&mut self, color: PlayerColor) {
        info!("[SETTINGS] Player colour set to {}", color);
        self.preferences.player_color = color;
    }

    /// Give up the current game
    ///
    /// In AI mode the human resigns; in local mode the side to move does.
    pub fn resign(&mut self) -> GameResult<()> {
        self.ensure_playing()?;

        let resigning = match self.active.mode {
            GameMode::Ai => Side::from(self.active.player_color),
            GameMode::Local => self.board.turn(),
        };
        info!("[SESSION] {} resigned", side_name(resigning));
        self.finish(GameStatus::Resigned, Some(resigning.other()));
        Ok(())
    }

    /// Take back moves so the same human is to move again
    ///
    /// Local mode undoes one ply; AI mode undoes the AI's reply and the
    /// human's move before it. Returns the number of plies undone.
    pub fn undo(&mut self) -> GameResult<usize> {
        self.ensure_playing()?;
        if self.ai_busy {
            return Err(GameError::AiThinking);
        }

        let plies = match self.active.mode {
            GameMode::Ai => 2,
            GameMode::Local => 1,
        };
        if self.board.ply_count() < plies {
            return Err(GameError::NothingToUndo);
        }

        for _ in 0..plies {
            self.board.undo_last_move();
        }
        self.pending_promotion = None;
        self.selection.clear();
        self.captured = CapturedPieces::from_history(self.board.history());
        self.message = None;

        debug!(
            "[SESSION] Undid {} plies, {} remain",
            plies,
            self.board.ply_count()
        );
        Ok(plies)
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    /// Submit a human move
    ///
    /// A pawn move to the last rank without `promotion` is not played: it
    /// becomes the pending promotion, resolved by submitting the same squares
    /// with a piece (or [`ChessSession::resolve_promotion`]) and discarded by
    /// [`ChessSession::cancel_promotion`].
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> GameResult<SubmitOutcome> {
        self.ensure_playing()?;
        if self.ai_busy {
            return Err(GameError::AiThinking);
        }
        if let Some(pending) = self.pending_promotion {
            if !(pending.matches(from, to) && promotion.is_some()) {
                return Err(GameError::PromotionPending {
                    from: pending.from.to_string(),
                    to: pending.to.to_string(),
                });
            }
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        let spec = MoveSpec::new(from, to, promotion);

        if promotion.is_none() && self.needs_promotion_choice(from, to) {
            if !self.board.is_promotion_move(from, to) {
                return Err(GameError::IllegalMove {
                    uci: spec.to_string(),
                });
            }
            let pending = PendingPromotion::new(from, to);
            self.pending_promotion = Some(pending);
            debug!("[SESSION] Promotion pending for {}{}", from, to);
            return Ok(SubmitOutcome::PromotionPending(pending));
        }

        let applied = self.apply_move(spec, true)?;
        Ok(SubmitOutcome::Applied(applied))
    }

    /// Finish the pending promotion with `piece`
    pub fn resolve_promotion(&mut self, piece: PieceKind) -> GameResult<SubmitOutcome> {
        let pending = self
            .pending_promotion
            .ok_or(GameError::NoPendingPromotion)?;
        let spec = pending.complete(piece);
        self.submit_move(spec.from, spec.to, spec.promotion)
    }

    /// Drop the pending promotion; the board was never touched
    pub fn cancel_promotion(&mut self) -> GameResult<()> {
        match self.pending_promotion.take() {
            Some(pending) => {
                debug!("[SESSION] Promotion {}{} cancelled", pending.from, pending.to);
                Ok(())
            }
            None => Err(GameError::NoPendingPromotion),
        }
    }

    /// Click-to-move entry point
    ///
    /// Clicking a highlighted destination plays the selected piece there;
    /// clicking one of the mover's own pieces selects it; any other click
    /// clears the selection.
    pub fn select_square(&mut self, square: Square) -> GameResult<SquareClick> {
        self.ensure_playing()?;
        if self.ai_busy {
            return Err(GameError::AiThinking);
        }
        if let Some(pending) = self.pending_promotion {
            return Err(GameError::PromotionPending {
                from: pending.from.to_string(),
                to: pending.to.to_string(),
            });
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        if let Some(from) = self.selection.square {
            if self.selection.is_destination(square) {
                let outcome = self.submit_move(from, square, None)?;
                return Ok(SquareClick::Moved(outcome));
            }
        }

        let turn = self.board.turn();
        match self.board.piece_at(square) {
            Some(piece) if piece.color == turn => {
                let destinations = self.board.legal_destinations(square);
                self.selection.select(square, destinations.clone());
                Ok(SquareClick::Selected {
                    square,
                    destinations,
                })
            }
            _ => {
                self.selection.clear();
                Ok(SquareClick::Cleared)
            }
        }
    }

    // ------------------------------------------------------------------
    // AI delivery
    // ------------------------------------------------------------------

    /// Deliver every AI reply that has arrived, without blocking
    ///
    /// Returns `true` if a reply put a move on the board.
    pub fn poll_ai(&mut self) -> bool {
        let mut applied = false;
        while let Ok(reply) = self.replies_rx.try_recv() {
            applied |= self.handle_ai_reply(reply);
        }
        applied
    }

    /// Block until the outstanding AI reply arrives or `timeout` passes
    ///
    /// Stale replies received meanwhile are discarded. Returns `true` if the
    /// AI's move was played.
    pub fn wait_for_ai(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.ai_busy {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.replies_rx.recv_timeout(remaining) {
                Ok(reply) => {
                    if self.handle_ai_reply(reply) {
                        return true;
                    }
                }
                Err(_) => {
                    warn!("[AI] No reply within {:?}", timeout);
                    return false;
                }
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.fen()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side credited with the win once the game is over
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn turn(&self) -> Side {
        self.board.turn()
    }

    pub fn ply_count(&self) -> usize {
        self.board.ply_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.ai_busy
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Settings of the game in progress
    pub fn settings(&self) -> GameSettings {
        self.active
    }

    /// Settings the next new game will use
    pub fn preferences(&self) -> GameSettings {
        self.preferences
    }

    /// Legal destinations of the piece on `square`
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        self.board.legal_destinations(square)
    }

    pub fn last_move(&self) -> Option<&AppliedMove> {
        self.board.last_move()
    }

    pub fn king_in_check(&self) -> Option<Square> {
        self.board.king_in_check_square()
    }

    /// Latest encouragement or result message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn get_progress(&self) -> ProgressStats {
        self.progress.get_progress()
    }

    pub fn set_progress(&mut self, stats: ProgressStats) {
        self.progress.set_progress(stats);
    }

    /// One line describing whose turn it is or how the game ended
    pub fn status_text(&self) -> String {
        if self.status.is_game_over() {
            return self.status.message(self.winner);
        }
        if self.ai_busy {
            return "AI is thinking...".to_string();
        }
        let turn = side_name(self.board.turn());
        if self.board.is_in_check() {
            format!("{turn}'s turn - CHECK!")
        } else {
            format!("{turn}'s turn")
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            fen: self.board.fen(),
            status: self.status,
            turn: PlayerColor::from(self.board.turn()),
            mode: self.active.mode,
            difficulty: self.active.difficulty,
            player_color: self.active.player_color,
            is_ai_thinking: self.ai_busy,
            selected_square: self.selection.square.map(|sq| sq.to_string()),
            legal_moves: self
                .selection
                .destinations
                .iter()
                .map(|sq| sq.to_string())
                .collect(),
            pending_promotion: self
                .pending_promotion
                .map(|p| (p.from.to_string(), p.to.to_string())),
            last_move: self
                .board
                .last_move()
                .map(|m| (m.spec.from.to_string(), m.spec.to.to_string())),
            king_in_check: self.board.king_in_check_square().map(|sq| sq.to_string()),
            captured_by_white: self.captured.symbols(Side::White),
            captured_by_black: self.captured.symbols(Side::Black),
            material_advantage: self.captured.material_advantage(),
            ply_count: self.board.ply_count(),
            generation: self.generation,
            status_text: self.status_text(),
            message: self.message.clone(),
        }
    }

    /// Text diagram of the board from `perspective`'s side
    pub fn render_board(&self, perspective: Side) -> String {
        let ranks: Vec<u32> = match perspective {
            Side::White => (0..8).rev().collect(),
            Side::Black => (0..8).collect(),
        };
        let files: Vec<u32> = match perspective {
            Side::White => (0..8).collect(),
            Side::Black => (0..8).rev().collect(),
        };

        let mut out = String::new();
        for &rank in &ranks {
            out.push_str(&format!("{} ", rank + 1));
            for &file in &files {
                let square = Square::new(rank * 8 + file);
                let symbol = self.board.piece_at(square).map(piece_symbol).unwrap_or('.');
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out.push_str("  ");
        for &file in &files {
            out.push(' ');
            out.push(char::from(b'a' + file as u8));
        }
        out.push('\n');
        out
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_playing(&self) -> GameResult<()> {
        if self.status.is_game_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn is_human_turn(&self) -> bool {
        self.active.is_human(self.board.turn())
    }

    fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::Playing && self.active.ai_side() == Some(self.board.turn())
    }

    fn needs_promotion_choice(&self, from: Square, to: Square) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|piece| reaches_last_rank(piece.role, piece.color, to))
    }

    /// The one place moves reach the board, for humans and the AI alike
    fn apply_move(&mut self, spec: MoveSpec, by_human: bool) -> GameResult<AppliedMove> {
        let applied = self
            .board
            .apply(&spec)
            .map_err(|_| GameError::IllegalMove {
                uci: spec.to_string(),
            })?;

        self.pending_promotion = None;
        self.selection.clear();

        debug!(
            "[SESSION] {} played {} (ply {})",
            side_name(applied.side),
            applied.spec,
            self.board.ply_count()
        );

        if let Some(role) = applied.captured {
            let by_human = self.active.is_human(applied.side);
            self.captured.add_capture(applied.side.other(), role);
            self.emit(GameEvent::Capture {
                by: applied.side,
                role,
                by_human,
            });
        }

        match board_state(&self.board) {
            BoardState::Checkmate { winner } => self.finish(GameStatus::Checkmate, Some(winner)),
            BoardState::Draw(DrawReason::Stalemate) => self.finish(GameStatus::Stalemate, None),
            BoardState::Draw(reason) => {
                debug!("[SESSION] Draw by {:?}", reason);
                self.finish(GameStatus::Draw, None);
            }
            BoardState::Playing { in_check } => {
                if by_human && self.active.mode == GameMode::Ai {
                    self.encourage(&applied, in_check);
                }
                if self.is_ai_turn() {
                    self.schedule_ai();
                }
            }
        }

        Ok(applied)
    }

    fn encourage(&mut self, applied: &AppliedMove, in_check: bool) {
        let kind = if in_check {
            Some(MessageKind::Check)
        } else if applied.is_capture() {
            Some(MessageKind::Capture)
        } else if self.rng.random_bool(GOOD_MOVE_CHANCE) {
            Some(MessageKind::GoodMove)
        } else {
            None
        };
        if let Some(kind) = kind {
            self.message = Some(random_message(kind, &mut self.rng).to_string());
        }
    }

    fn finish(&mut self, status: GameStatus, winner: Option<Side>) {
        self.status = status;
        self.winner = winner;
        self.ai_busy = false;
        self.pending_promotion = None;
        self.selection.clear();

        let player = Side::from(self.active.player_color);
        let result = PlayerResult::for_player(winner, player);

        self.message = Some(match self.active.mode {
            GameMode::Ai => {
                let kind = match result {
                    PlayerResult::Win => MessageKind::Win,
                    PlayerResult::Loss => MessageKind::Lose,
                    PlayerResult::Draw => MessageKind::Draw,
                };
                random_message(kind, &mut self.rng).to_string()
            }
            GameMode::Local => status.message(winner),
        });

        info!(
            "[SESSION] Game #{} over: {} ({})",
            self.generation,
            status,
            status.message(winner)
        );

        self.emit(GameEvent::Outcome(OutcomeEvent {
            result,
            status,
            winner,
            difficulty: self.active.difficulty,
            mode: self.active.mode,
        }));
    }

    fn emit(&mut self, event: GameEvent) {
        self.progress.apply(&event);
        self.events.push(event);
    }

    fn schedule_ai(&mut self) {
        let generation = self.generation;
        let difficulty = self.active.difficulty;
        let seed: u64 = self.rng.random();

        self.ai_busy = true;
        info!(
            "[AI] Scheduling {} move for {} (generation {})",
            difficulty,
            side_name(self.board.turn()),
            generation
        );

        let job = search_job(
            self.board.clone(),
            difficulty,
            seed,
            generation,
            self.replies_tx.clone(),
        );
        if let Err(e) = self.runner.spawn(job) {
            warn!("[AI] Could not schedule search: {}", e);
            self.ai_busy = false;
        }
    }

    /// Compare-and-discard: only a reply for the live generation of a game
    /// still in progress may touch the board
    fn handle_ai_reply(&mut self, reply: AiReply) -> bool {
        if reply.generation != self.generation || self.status.is_game_over() || !self.ai_busy {
            debug!(
                "[AI] Discarding stale reply (generation {}, live {}, status {})",
                reply.generation, self.generation, self.status
            );
            return false;
        }
        self.ai_busy = false;

        let Some(report) = reply.report else {
            warn!("[AI] Search returned no move");
            return false;
        };

        info!(
            "[AI] {} plays {} via {:?} (depth {}, {} nodes)",
            side_name(self.board.turn()),
            report.mv,
            report.path,
            report.depth,
            report.stats.nodes
        );

        match self.apply_move(report.mv, false) {
            Ok(_) => true,
            Err(e) => {
                warn!("[AI] Move {} rejected: {}", report.mv, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for ChessSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChessSession")
            .field("fen", &self.board.fen())
            .field("status", &self.status)
            .field("settings", &self.active)
            .field("generation", &self.generation)
            .field("ai_busy", &self.ai_busy)
            .field("pending_promotion", &self.pending_promotion)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::DeferredRunner;

    fn local_session() -> ChessSession {
        let config = SessionConfig {
            ai_seed: Some(1),
            ..SessionConfig::default()
        };
        let mut session = ChessSession::with_runner(&config, Box::new(DeferredRunner::new()));
        session.new_game(NewGameOptions::mode(GameMode::Local));
        session
    }

    fn play(session: &mut ChessSession, text: &str) -> SubmitOutcome {
        let mv: MoveSpec = text.parse().unwrap();
        session.submit_move(mv.from, mv.to, mv.promotion).unwrap()
    }

    #[test]
    fn test_new_game_bumps_generation() {
        let mut session = local_session();
        let first = session.generation();
        session.new_game(NewGameOptions::default());
        assert_eq!(session.generation(), first + 1);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.ply_count(), 0);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut session = local_session();
        let fen = session.fen();
        let result = session.submit_move(Square::E2, Square::E5, None);
        assert!(matches!(result, Err(GameError::IllegalMove { .. })));
        assert_eq!(session.fen(), fen);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_select_then_click_destination_moves() {
        //! Two clicks make a move: select the piece, then its target
        let mut session = local_session();

        match session.select_square(Square::G1).unwrap() {
            SquareClick::Selected {
                square,
                destinations,
            } => {
                assert_eq!(square, Square::G1);
                assert_eq!(destinations.len(), 2);
                assert!(destinations.contains(&Square::F3));
                assert!(destinations.contains(&Square::H3));
            }
            other => panic!("expected a selection, got {other:?}"),
        }

        let click = session.select_square(Square::F3).unwrap();
        assert!(matches!(click, SquareClick::Moved(SubmitOutcome::Applied(_))));
        assert_eq!(session.ply_count(), 1);
        assert!(!session.selection().is_selected());
    }

    #[test]
    fn test_click_on_opponent_piece_clears_selection() {
        let mut session = local_session();
        session.select_square(Square::E2).unwrap();
        let click = session.select_square(Square::E7).unwrap();
        assert_eq!(click, SquareClick::Cleared);
        assert!(!session.selection().is_selected());
    }

    #[test]
    fn test_fools_mate_in_local_mode() {
        let mut session = local_session();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut session, text);
        }
        assert_eq!(session.status(), GameStatus::Checkmate);
        assert_eq!(session.winner(), Some(Side::Black));
        assert_eq!(session.status_text(), "Black wins by checkmate!");
        assert_eq!(session.message(), Some("Black wins by checkmate!"));
        assert_eq!(
            session.submit_move(Square::A2, Square::A3, None),
            Err(GameError::GameOver)
        );

        let events = session.drain_events();
        assert!(matches!(
            events.last(),
            Some(GameEvent::Outcome(OutcomeEvent {
                status: GameStatus::Checkmate,
                mode: GameMode::Local,
                ..
            }))
        ));
        assert_eq!(session.get_progress().games_played, 0, "local games are not tracked");
    }

    #[test]
    fn test_status_text_reports_check() {
        let mut session = local_session();
        for text in ["e2e4", "f7f5", "d1h5"] {
            play(&mut session, text);
        }
        assert_eq!(session.status_text(), "Black's turn - CHECK!");
        assert_eq!(session.king_in_check(), Some(Square::E8));
    }

    #[test]
    fn test_captures_update_tray_and_undo_rebuilds_it() {
        let mut session = local_session();
        for text in ["e2e4", "d7d5", "e4d5"] {
            play(&mut session, text);
        }
        assert_eq!(session.captured().white_captured, vec![PieceKind::Pawn]);
        assert_eq!(session.get_progress().total_pieces_captured, 1);

        assert_eq!(session.undo(), Ok(1));
        assert!(session.captured().white_captured.is_empty());
    }

    #[test]
    fn test_render_board_orientation() {
        let session = local_session();
        let white = session.render_board(Side::White);
        let black = session.render_board(Side::Black);
        assert!(white.starts_with("8 "));
        assert!(black.starts_with("1 "));
        assert!(white.trim_end().ends_with("a b c d e f g h"));
        assert!(black.trim_end().ends_with("h g f e d c b a"));
    }

    #[test]
    fn test_view_serializes() {
        let mut session = local_session();
        play(&mut session, "e2e4");
        let view = session.view();
        assert_eq!(view.last_move, Some(("e2".to_string(), "e4".to_string())));
        assert_eq!(view.turn, PlayerColor::Black);

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"status\":\"playing\""));
        assert!(json.contains("\"isAiThinking\":false"));
    }
}
