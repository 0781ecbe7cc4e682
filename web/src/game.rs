use std::rc::Rc;

use crate::source::{HttpTriviaSource, SourceConfig};
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use yew::prelude::*;

pub(crate) enum Msg {
    StartGame,
    BoardLoaded(game::LoadTicket, game::Result<game::Board>),
    RevealClue(game::ClueRef),
}

fn cell_classes(state: game::RevealState) -> Classes {
    use game::RevealState::*;

    classes!(
        "cell",
        match state {
            Hidden => classes!("hidden"),
            Question => classes!("question"),
            Answer => classes!("answer", "locked"),
        }
    )
}

#[derive(Properties, Clone, PartialEq)]
struct ClueProps {
    clue_ref: game::ClueRef,
    state: game::RevealState,
    text: AttrValue,
    callback: Callback<game::ClueRef>,
}

#[function_component(ClueView)]
fn clue_component(props: &ClueProps) -> Html {
    let ClueProps {
        clue_ref,
        state,
        text,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("clicked {}", clue_ref);
        callback.emit(clue_ref);
    });

    html! {
        <td class={cell_classes(state)} {onclick}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of category columns
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CATEGORIES)]
    pub categories: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: usize,

    /// Base URL of the trivia API
    #[arg(long, default_value = "https://jservice.io/api")]
    pub api_url: String,

    /// How many categories to ask for when picking a board
    #[arg(long, default_value_t = 100)]
    pub pool_size: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u32,

    /// Force a seed for the first board instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.categories, self.clues)
    }

    fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.api_url.clone(),
            pool_size: self.pool_size.max(1),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: game::GameConfig,
    source: Rc<HttpTriviaSource>,
    pool_size: usize,
    seed: Option<u64>,
    session: game::GameSession,
}

impl GameView {
    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.session.begin_load() else {
            return false;
        };

        let seed = self.seed.take().unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let source = Rc::clone(&self.source);
        let config = self.config;
        let pool_size = self.pool_size;
        ctx.link().send_future(async move {
            let selector = game::RandomCategorySelector::new(seed);
            let result = game::new_board(&*source, config, pool_size, selector).await;
            Msg::BoardLoaded(ticket, result)
        });
        true
    }

    fn status_line(&self) -> Option<String> {
        if let Some(err) = self.session.last_error() {
            return Some(format!("Could not load a board: {}", err));
        }
        let board = self.session.board()?;
        Some(if board.is_fully_revealed() {
            "Board cleared!".to_string()
        } else {
            format!("{} of {} answered", board.answered_count(), board.total_clues())
        })
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.session.board() else {
            return html! {
                <table id="jeopardy">
                    <thead><tr id="headerRow"/></thead>
                    <tbody id="gameBody"/>
                </table>
            };
        };

        let callback = ctx.link().callback(Msg::RevealClue);

        html! {
            <table id="jeopardy">
                <thead>
                    <tr id="headerRow">
                        {
                            for board.categories().iter().map(|category| html! {
                                <td class="cell header-cell">{category.header()}</td>
                            })
                        }
                    </tr>
                </thead>
                <tbody id="gameBody">
                    {
                        for (0..board.rows()).map(|row| html! {
                            <tr data-row={row.to_string()}>
                                {
                                    for (0..board.columns()).map(|column| {
                                        let clue_ref = self.session.clue_ref(column, row);
                                        match board.clue(column, row) {
                                            Some(clue) => html! {
                                                <ClueView
                                                    {clue_ref}
                                                    state={clue.state()}
                                                    text={AttrValue::from(clue.display_text().to_string())}
                                                    callback={callback.clone()}
                                                />
                                            },
                                            None => html! { <td class="cell empty"/> },
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let source_config = props.source_config();
        Self {
            config: props.game_config(),
            source: Rc::new(HttpTriviaSource::new(&source_config)),
            pool_size: source_config.pool_size,
            seed: props.seed,
            session: game::GameSession::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => {
                log::debug!("start game");
                self.start_game(ctx)
            }
            BoardLoaded(ticket, result) => match self.session.finish_load(ticket, result) {
                game::LoadOutcome::Installed => true,
                game::LoadOutcome::Failed(err) => {
                    log::error!("board load failed: {}", err);
                    true
                }
                game::LoadOutcome::Stale => false,
            },
            RevealClue(clue_ref) => match self.session.reveal(clue_ref) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("{}", err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.is_loading();
        let label = if self.session.board().is_some() {
            "Restart"
        } else {
            "Start"
        };
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartGame
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="gameBtn" disabled={loading} onclick={cb_start}>{label}</button>
                </nav>
                if loading {
                    <div id="spinner" class="spinner-border text-info" role="status">
                        <span class="visually-hidden">{"Loading..."}</span>
                    </div>
                }
                { self.view_board(ctx) }
                if let Some(status) = self.status_line() {
                    <p class="status" role="status">{status}</p>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answered_cells_are_locked() {
        let classes = cell_classes(game::RevealState::Answer);

        assert!(classes.contains("cell"));
        assert!(classes.contains("answer"));
        assert!(classes.contains("locked"));
        assert!(!cell_classes(game::RevealState::Question).contains("locked"));
        assert!(cell_classes(game::RevealState::Hidden).contains("hidden"));
    }

    #[test]
    fn props_clamp_into_game_config() {
        let props = GameProps {
            categories: 0,
            clues: 3,
            api_url: "http://localhost".to_string(),
            pool_size: 10,
            timeout_ms: 1,
            seed: None,
        };

        assert_eq!(props.game_config(), game::GameConfig::new_unchecked(1, 3));
    }

    #[test]
    fn props_carry_the_source_config() {
        let props = GameProps {
            categories: 6,
            clues: 5,
            api_url: "http://localhost:3000/api".to_string(),
            pool_size: 0,
            timeout_ms: 2500,
            seed: Some(4),
        };

        assert_eq!(
            props.source_config(),
            SourceConfig {
                base_url: "http://localhost:3000/api".to_string(),
                pool_size: 1,
                timeout_ms: 2500,
            }
        );
    }
}
