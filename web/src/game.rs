use crate::utils::*;
use clap::{Args, ValueEnum};
use lamppa_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PresetArg {
    /// 9x8 board
    Classic,
    /// 5x5 board
    Compact,
}

impl From<PresetArg> for game::Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Classic => Self::Classic,
            PresetArg::Compact => Self::Compact,
        }
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Starting board, individual flags override it
    #[arg(short, long, value_enum, default_value_t = PresetArg::Classic)]
    preset: PresetArg,

    /// Board width in cells
    #[arg(long, value_parser = parse_lenient, allow_hyphen_values = true)]
    width: Option<i64>,

    /// Board height in cells
    #[arg(long, value_parser = parse_lenient, allow_hyphen_values = true)]
    height: Option<i64>,

    /// How many random toggles make up a new puzzle
    #[arg(long, value_parser = parse_lenient, allow_hyphen_values = true)]
    scrambles: Option<i64>,

    /// Edge of one cell in pixels
    #[arg(long, value_parser = parse_lenient, allow_hyphen_values = true)]
    cell_size: Option<i64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GameProps {
    pub(crate) fn game_config(&self) -> game::Result<game::GameConfig> {
        let base = game::Preset::from(self.preset).config();
        game::GameConfig::from_raw(
            self.width.unwrap_or(base.size.0.into()),
            self.height.unwrap_or(base.size.1.into()),
            self.scrambles.unwrap_or(base.scrambles.into()),
            self.cell_size.unwrap_or(base.cell_size.into()),
        )
    }

    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Distance of a client coordinate from a possibly fractional board edge.
fn offset_from(client: i32, edge: f64) -> i32 {
    (f64::from(client) - edge).floor() as i32
}

/// Keyboard bindings: `q` or escape quits, space deals a new puzzle.
pub(crate) fn key_action(key: &str) -> Option<game::Action> {
    match key {
        "q" | "Q" | "Escape" => Some(game::Action::Quit),
        " " => Some(game::Action::Reset),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Apply(game::Action),
    BoardClick { client_x: i32, client_y: i32 },
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::Cell,
    size: u16,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { cell, size } = props.clone();

    let class = classes!("cell", if cell.is_on() { "on" } else { "off" });
    let style = format!("width: {size}px; height: {size}px;");

    html! {
        <td {class} {style}/>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::Result<game::Session>,
    board_ref: NodeRef,
    root_ref: NodeRef,
}

impl GameView {
    fn create_session(props: &GameProps) -> game::Result<game::Session> {
        let config = props.game_config()?;
        let seed = props.seed().unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        game::Session::new(config, seed)
    }

    fn apply(&mut self, action: game::Action) -> bool {
        let Ok(session) = &mut self.game else {
            return false;
        };

        match session.apply(action) {
            Ok(outcome) => {
                log::trace!("{:?} -> {:?}", action, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::debug!("{:?} rejected: {}", action, err);
                false
            }
        }
    }

    /// Turns a viewport click into an offset from the board's top-left corner.
    fn board_offset(&self, client_x: i32, client_y: i32) -> Option<(i32, i32)> {
        let board = self.board_ref.cast::<web_sys::Element>()?;
        let rect = board.get_bounding_client_rect();
        Some((
            offset_from(client_x, rect.left()),
            offset_from(client_y, rect.top()),
        ))
    }

    fn view_board(&self, ctx: &Context<Self>, session: &game::Session) -> Html {
        let (cols, rows) = session.size();
        let cell_size = session.config().cell_size;

        let onclick = ctx.link().callback(|e: MouseEvent| Msg::BoardClick {
            client_x: e.client_x(),
            client_y: e.client_y(),
        });
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Apply(game::Action::Reset)
        });

        let state_class = match session.state() {
            game::SessionState::Scrambled => "not-started",
            game::SessionState::Playing => "in-progress",
            game::SessionState::Won => "win",
            game::SessionState::Ended => "ended",
        };

        html! {
            <>
                <table ref={self.board_ref.clone()} class={classes!(state_class)} {onclick}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let cell = session.cell_at((x, y)).unwrap_or_default();
                                        html! { <CellView {cell} size={cell_size}/> }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <nav>
                    <span class="status">{session.status().to_string()}</span>
                    <button onclick={cb_reset} disabled={session.state().is_ended()}>{"New puzzle"}</button>
                </nav>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let game = Self::create_session(ctx.props());
        if let Err(err) = &game {
            log::error!("could not start game: {}", err);
        }

        Self {
            game,
            board_ref: NodeRef::default(),
            root_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Apply(action) => self.apply(action),
            BoardClick { client_x, client_y } => match self.board_offset(client_x, client_y) {
                Some((x, y)) => self.apply(game::Action::ActivatePixel { x, y }),
                None => false,
            },
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(root) = self.root_ref.cast::<web_sys::HtmlElement>() {
                if let Err(err) = root.focus() {
                    log::warn!("could not focus board: {:?}", err);
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            let action = key_action(&e.key());
            if action.is_some() {
                e.prevent_default();
            }
            action.map(Msg::Apply)
        });

        let content = match &self.game {
            Ok(session) => self.view_board(ctx, session),
            Err(err) => html! {
                <p class="error">{format!("Could not start game: {}", err)}</p>
            },
        };

        html! {
            <div class="lamppa" ref={self.root_ref.clone()} tabindex="0" {onkeydown}
                oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                {content}
            </div>
        }
    }
}
