use crate::puzzle;
use crate::utils::js_random_seed;
use sopita_core as game;
use yew::prelude::*;

/// Feedback line for the last action, replaced on every confirm.
#[derive(Clone, Debug, PartialEq)]
enum Banner {
    Found(String),
    NoMatch,
    NoSelection,
}

impl Banner {
    fn text(&self) -> String {
        match self {
            Self::Found(word) => format!("✅ Encontraste: {word}"),
            Self::NoMatch => "❌ Esa selección no corresponde. Intenta otra.".to_string(),
            Self::NoSelection => "Selecciona letras primero.".to_string(),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Found(_) => "banner ok",
            Self::NoMatch => "banner err",
            Self::NoSelection => "banner hint",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Pick(game::Coord2),
    Confirm,
    Undo,
    Clear,
    NewGame,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a filler seed instead of random
    pub seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    letter: char,
    locked: bool,
    selected: bool,
    on_pick: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        letter,
        locked,
        selected,
        on_pick,
    } = props.clone();

    let class = classes!(
        "cell",
        locked.then_some("found"),
        selected.then_some("selected"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        on_pick.emit((row, col));
    });

    html! {
        <td {class} {onclick}>
            <button disabled={locked}>{letter}</button>
        </td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::SelectGame,
    banner: Option<Banner>,
    forced_seed: Option<u64>,
}

impl GameView {
    fn new_session(seed: u64) -> game::SelectGame {
        let layout = game::PuzzleBuilder::new(puzzle::GRID_SIZE)
            .words(puzzle::target_words())
            .build(game::RandomGridFiller::new(seed))
            .expect("hand-authored word paths must not conflict");
        game::SelectGame::new(layout)
    }

    fn pick(&mut self, coords: game::Coord2) -> bool {
        match self.session.pick(coords) {
            Ok(outcome) => {
                log::debug!("pick {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("pick {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn confirm(&mut self) -> bool {
        use game::ConfirmOutcome::*;

        match self.session.confirm_selection() {
            Ok(Won(word)) => {
                log::info!("won with {}", word);
                self.banner = Some(Banner::Found(word));
                true
            }
            Ok(Found(word)) => {
                self.banner = Some(Banner::Found(word));
                true
            }
            Ok(NoMatch) => {
                self.banner = Some(Banner::NoMatch);
                true
            }
            Ok(NoSelection) => {
                self.banner = Some(Banner::NoSelection);
                true
            }
            Err(err) => {
                log::warn!("confirm rejected: {}", err);
                false
            }
        }
    }

    fn word_list(words: impl Iterator<Item = impl AsRef<str>>) -> String {
        let joined = words
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" / ");
        if joined.is_empty() { "—".to_string() } else { joined }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let forced_seed = ctx.props().seed;
        let seed = forced_seed.unwrap_or_else(js_random_seed);
        Self {
            session: Self::new_session(seed),
            banner: None,
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Pick(coords) => self.pick(coords),
            Confirm => self.confirm(),
            Undo => self.session.undo_last().has_update(),
            Clear => {
                self.banner = None;
                self.session.clear_selection().has_update()
            }
            NewGame => {
                let seed = self.forced_seed.unwrap_or_else(js_random_seed);
                log::debug!("new game, seed {}", seed);
                self.session = Self::new_session(seed);
                self.banner = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (rows, cols) = self.session.layout().size();
        let won = self.session.is_finished();
        let found = Self::word_list(self.session.found_words());
        let remaining = Self::word_list(self.session.remaining_words());
        let selection = self.session.selected_text();

        let on_pick = ctx.link().callback(Pick);
        let cb_confirm = ctx.link().callback(|_| Confirm);
        let cb_undo = ctx.link().callback(|_| Undo);
        let cb_clear = ctx.link().callback(|_| Clear);
        let cb_new = ctx.link().callback(|_| NewGame);

        html! {
            <div class="sopita">
                <header>
                    <span class="pill">{format!("✅ Encontradas: {found}")}</span>
                    <span class="pill">{format!("🔎 Faltan: {remaining}")}</span>
                    <span class="pill">
                        {format!("Selección: {}", if selection.is_empty() { "—".to_string() } else { selection })}
                    </span>
                </header>
                <nav>
                    <button onclick={cb_confirm} disabled={won}>{"✔️ Confirmar"}</button>
                    <button onclick={cb_undo} disabled={won}>{"↩️ Deshacer"}</button>
                    <button onclick={cb_clear} disabled={won}>{"🧼 Limpiar"}</button>
                    <button onclick={cb_new}>{"🔄 Nuevo"}</button>
                </nav>
                if let Some(banner) = &self.banner {
                    <p class={banner.class()}>{banner.text()}</p>
                }
                <table class={won.then_some("won")}>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let pos = (row, col);
                                        html! {
                                            <CellView
                                                {row}
                                                {col}
                                                letter={self.session.layout().letter_at(pos)}
                                                locked={self.session.is_found_cell(pos)}
                                                selected={self.session.is_selected(pos)}
                                                on_pick={on_pick.clone()}
                                            />
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <ul class="clues">
                    {
                        for self.session.layout().placements().iter().map(|p| html! {
                            <li class={self.session.is_found_cell(p.path()[0]).then_some("solved")}>
                                {p.clue()}
                            </li>
                        })
                    }
                </ul>
                if won {
                    <section class="win">
                        { for puzzle::WIN_MESSAGE.iter().map(|line| html!{ <h2>{*line}</h2> }) }
                    </section>
                }
            </div>
        }
    }
}
