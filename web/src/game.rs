use minefield_core as game;
use game::{Banner, Coord, Coord2, GameConfig, Label, ViewCell};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::screen::Screen;
use crate::utils::*;

const BLOCK_SIZE: u32 = 24;
const BORDER_SIZE: u32 = 100;
const PADDING: u32 = 1;

/// Pixel position of the cell at `index` along either axis.
const fn offset(index: Coord) -> u32 {
    BORDER_SIZE + index as u32 * (BLOCK_SIZE + PADDING)
}

const fn board_extent(cells: Coord) -> u32 {
    cells as u32 * (BLOCK_SIZE + PADDING)
}

fn translate(x: u32, y: u32) -> String {
    format!("translate({}, {})", x, y)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: Coord,
    y: Coord,
    cell: ViewCell,
    #[prop_or_default]
    fresh: bool,
    callback: Callback<Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        cell,
        fresh,
        callback,
    } = props.clone();

    let label_class = match cell.label {
        Some(Label::Blank) => classes!("num-0"),
        Some(Label::Number(count)) => classes!(format!("num-{}", count)),
        Some(Label::Mine) => classes!("mine"),
        None => classes!(),
    };
    let cover_class = classes!(
        "cover",
        (!cell.covered).then_some("open"),
        fresh.then_some("fresh")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        callback.emit((x, y));
    });

    let block = BLOCK_SIZE.to_string();
    let half = BLOCK_SIZE / 2;

    html! {
        <g class="cell" transform={translate(offset(x), offset(y))}>
            <g class="base">
                <rect class="bg" width={block.clone()} height={block.clone()}/>
                <text class={label_class} transform={translate(half, half)}>
                    { cell.label.map_or("", Label::text) }
                </text>
            </g>
            <g class={cover_class} {onclick}>
                <rect class="coverbase" width={block.clone()} height={block}/>
                <polygon
                    class="covershine"
                    points={format!("0,0 {0},0 0,{0}", BLOCK_SIZE)}
                />
            </g>
        </g>
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    /// Fixed seed for the layout generator, random when absent
    pub seed: Option<u64>,
    pub config: GameConfig,
}

pub(crate) struct GameView {
    sync: game::RenderSync<Screen>,
    width_ref: NodeRef,
    height_ref: NodeRef,
    mines_ref: NodeRef,
}

impl GameView {
    fn read_input(node: &NodeRef) -> i64 {
        node.cast::<HtmlInputElement>()
            .map_or(0, |input| lenient_int(&input.value()))
    }

    fn view_notice(&self) -> Html {
        match self.sync.port().notice() {
            Some(notice) => html! { <p class="notice">{ notice.to_string() }</p> },
            None => html! {},
        }
    }

    fn view_banner(&self) -> Html {
        let view = self.sync.port().view();
        let Some(banner) = view.banner() else {
            return html! {};
        };

        let (cols, rows) = view.size();
        let class = classes!(
            "state",
            match banner {
                Banner::Victory => "victory",
                Banner::GameOver => "loss",
            }
        );
        let transform = translate(
            board_extent(cols) / 2 + BORDER_SIZE,
            board_extent(rows) / 2 + BORDER_SIZE,
        );

        html! {
            <text {class} {transform}>{ banner.to_string() }</text>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let state = self.sync.state();
        let (cols, rows) = state.size();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::NewGame
        });

        html! {
            <form class="newgame" {onsubmit}>
                <label>
                    {"Width "}
                    <input ref={self.width_ref.clone()} type="number" value={cols.to_string()}/>
                </label>
                <label>
                    {"Height "}
                    <input ref={self.height_ref.clone()} type="number" value={rows.to_string()}/>
                </label>
                <label>
                    {"Mines "}
                    <input ref={self.mines_ref.clone()} type="number" value={state.mine_count().to_string()}/>
                </label>
                <button type="submit">{"New game"}</button>
            </form>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, config } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let state = game::GameState::new(game::RandomLayoutGenerator::new(seed), config);
        Self {
            sync: game::RenderSync::new(state, Screen::default()),
            width_ref: NodeRef::default(),
            height_ref: NodeRef::default(),
            mines_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Reveal(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.sync.on_cell_click(coords)
            }
            Msg::NewGame => {
                let width = Self::read_input(&self.width_ref);
                let height = Self::read_input(&self.height_ref);
                let mines = Self::read_input(&self.mines_ref);
                log::debug!("new game: {}x{} with {} mines", width, height, mines);

                // a rejected game still changes the notice
                self.sync.on_new_game(width, height, mines);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let screen = self.sync.port();
        let view = screen.view();
        let (cols, rows) = view.size();
        let (board_width, board_height) = (board_extent(cols), board_extent(rows));
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <div class="minefield">
                { self.view_form(ctx) }
                { self.view_notice() }
                <svg
                    width={(board_width + BORDER_SIZE * 2).to_string()}
                    height={(board_height + BORDER_SIZE * 2).to_string()}
                >
                    <rect
                        class="border"
                        x={(BORDER_SIZE - 2).to_string()}
                        y={(BORDER_SIZE - 2).to_string()}
                        width={(board_width + 3).to_string()}
                        height={(board_height + 3).to_string()}
                    />
                    {
                        for view.iter_cells().map(|((x, y), cell)| {
                            let fresh = screen.is_fresh((x, y));
                            let callback = callback.clone();
                            html! {
                                <CellView key={format!("{}-{}", x, y)} {x} {y} {cell} {fresh} {callback}/>
                            }
                        })
                    }
                    { self.view_banner() }
                </svg>
            </div>
        }
    }
}
