use crate::audio::WebAudio;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use memorito_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Restart,
    Accept,
    Reject,
    ToggleMute,
    Reveal(game::CardId),
    Tick(game::RoundId),
    Wake(game::RoundId, game::Wake),
}

fn card_class(face: game::CardFace) -> Classes {
    use game::CardFace::*;

    classes!(
        "card",
        match face {
            Hidden => classes!(),
            Revealed(_) => classes!("flipped"),
            Matched(_) => classes!("flipped", "matched"),
            Wrong(_) => classes!("flipped", "wrong"),
        }
    )
}

fn card_label(face: game::CardFace) -> String {
    face.symbol()
        .map_or_else(|| "?".to_string(), |symbol| symbol.to_string())
}

const fn mute_icon(muted: bool) -> &'static str {
    if muted { "🔇" } else { "🔊" }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: game::CardId,
    face: game::CardFace,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        id,
        face,
        locked,
        callback,
    } = props.clone();

    let mut class = card_class(face);
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} click", id);
        callback.emit(id);
    });

    html! {
        <div {class} {onclick}>{card_label(face)}</div>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl GameProps {
    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Owns everything the engine cannot: rendering, sound, and timers.
#[derive(Debug)]
pub(crate) struct GameView {
    game: game::Game,
    seed: Option<u64>,
    audio: WebAudio,
    ticker: Option<Interval>,
    wake: Option<Timeout>,
}

impl GameView {
    fn deal(&self) -> game::Deck {
        use game::{DeckGenerator, ShuffledDeckGenerator};

        let seed = self.seed.unwrap_or_else(js_random_seed);
        ShuffledDeckGenerator::new(seed).generate(self.game.config())
    }

    fn create_ticker(ctx: &Context<Self>, round: game::RoundId, period_ms: u32) -> Interval {
        let link = ctx.link().clone();
        Interval::new(period_ms, move || link.send_message(Msg::Tick(round)))
    }

    fn apply(&mut self, ctx: &Context<Self>, effects: game::Effects) {
        use game::Effect::*;

        for effect in effects {
            log::trace!("effect: {:?}", effect);
            match effect {
                Sound(cue) => self.audio.play(cue),
                StartTicker(round) => {
                    let period_ms = self.game.config().tick_ms;
                    self.ticker = Some(GameView::create_ticker(ctx, round, period_ms));
                }
                StopTicker => {
                    // dropping the handles cancels them
                    self.ticker = None;
                    self.wake = None;
                }
                WakeAfter {
                    delay_ms,
                    round,
                    wake,
                } => {
                    let link = ctx.link().clone();
                    self.wake = Some(Timeout::new(delay_ms, move || {
                        link.send_message(Msg::Wake(round, wake))
                    }));
                }
                Notify(message) => gloo::dialogs::alert(message),
            }
        }
    }

    fn apply_result(&mut self, ctx: &Context<Self>, result: game::Result<game::Effects>) -> bool {
        match result {
            Ok(effects) => {
                self.apply(ctx, effects);
                true
            }
            Err(err) => {
                log::debug!("ignored: {}", err);
                false
            }
        }
    }

    fn view_start(&self, ctx: &Context<Self>) -> Html {
        let config = self.game.config();
        let intro = format!(
            "Find all {} pairs in under {} minutes.",
            config.pair_count(),
            config.time_limit_secs / 60
        );

        html! {
            <section class="screen start">
                <h1>{"A little game for you 💌"}</h1>
                <p>{intro}</p>
                <button onclick={ctx.link().callback(|_| Msg::Start)}>{"Start"}</button>
            </section>
        }
    }

    fn view_playing(&self, ctx: &Context<Self>) -> Html {
        let scoreboard = self.game.scoreboard();
        let pairs = format!("{}/{}", scoreboard.pairs, scoreboard.total_pairs);
        let moves = scoreboard.moves.to_string();
        let cards = self.game.round().map_or(&[][..], |round| round.cards());

        html! {
            <section class="screen playing">
                <nav>
                    <aside>{"Pairs "}<strong>{pairs}</strong></aside>
                    <aside>{"Moves "}<strong>{moves}</strong></aside>
                    <aside><strong>{scoreboard.clock()}</strong></aside>
                    <button class="restart" onclick={ctx.link().callback(|_| Msg::Restart)}>{"↺"}</button>
                </nav>
                <div class="board">
                    {
                        for cards.iter().map(|card| {
                            let id = card.id();
                            let face = card.face();
                            let locked = !self.game.can_reveal(id);
                            let callback = ctx.link().callback(Msg::Reveal);
                            html! {
                                <CardView {id} {face} {locked} {callback}/>
                            }
                        })
                    }
                </div>
            </section>
        }
    }

    fn view_lost(&self, ctx: &Context<Self>) -> Html {
        let scoreboard = self.game.scoreboard();
        let summary = format!(
            "You found {} of {} pairs.",
            scoreboard.pairs, scoreboard.total_pairs
        );

        html! {
            <section class="screen lost">
                <h2>{"Time's up! ⏰"}</h2>
                <p>{summary}</p>
                <button onclick={ctx.link().callback(|_| Msg::Restart)}>{"Try again"}</button>
            </section>
        }
    }

    fn view_won(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="screen won">
                <h2>{"You found every pair! 💍"}</h2>
                <p>{"Will you marry me?"}</p>
                <button class="yes" onclick={ctx.link().callback(|_| Msg::Accept)}>{"Yes!"}</button>
                <button class="no" onclick={ctx.link().callback(|_| Msg::Reject)}>{"No"}</button>
            </section>
        }
    }

    fn view_accepted(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="screen accepted">
                <h2>{"💖 Best answer ever! 💖"}</h2>
                <button onclick={ctx.link().callback(|_| Msg::Restart)}>{"Play again"}</button>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let audio = WebAudio::new();
        log::debug!("audio available: {}", audio.is_available());

        Self {
            game: game::Game::default(),
            seed: ctx.props().seed(),
            audio,
            ticker: None,
            wake: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            Start => {
                let deck = self.deal();
                let result = self.game.start(deck);
                self.apply_result(ctx, result)
            }
            Restart => {
                let result = self.game.restart();
                self.apply_result(ctx, result)
            }
            Accept => {
                let result = self.game.accept_proposal();
                self.apply_result(ctx, result)
            }
            Reject => {
                let result = self.game.reject_proposal();
                self.apply_result(ctx, result)
            }
            ToggleMute => {
                let muted = self.game.toggle_mute();
                log::debug!("muted: {}", muted);
                true
            }
            Reveal(id) => match self.game.reveal(id) {
                Ok((outcome, effects)) => {
                    self.apply(ctx, effects);
                    outcome.has_update()
                }
                Err(err) => {
                    log::debug!("ignored reveal of {}: {}", id, err);
                    false
                }
            },
            Tick(round) => {
                let effects = self.game.tick(round);
                self.apply(ctx, effects);
                true
            }
            Wake(round, wake) => {
                let effects = self.game.wake(round, wake);
                self.apply(ctx, effects);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::Screen;

        let muted = self.game.is_muted();
        let cb_toggle_mute = ctx.link().callback(|_| Msg::ToggleMute);

        html! {
            <div class="memorito">
                <button class="mute" onclick={cb_toggle_mute}>{mute_icon(muted)}</button>
                {
                    match self.game.screen() {
                        Screen::Start => self.view_start(ctx),
                        Screen::Playing => self.view_playing(ctx),
                        Screen::Lost => self.view_lost(ctx),
                        Screen::Won => self.view_won(ctx),
                        Screen::ProposalAccepted => self.view_accepted(ctx),
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{CardFace, Symbol};

    const HEART: Symbol = Symbol('💕');

    #[test]
    fn card_class_reflects_face() {
        assert!(!card_class(CardFace::Hidden).contains("flipped"));
        assert!(card_class(CardFace::Revealed(HEART)).contains("flipped"));
        assert!(card_class(CardFace::Matched(HEART)).contains("matched"));

        let wrong = card_class(CardFace::Wrong(HEART));
        assert!(wrong.contains("wrong"));
        assert!(wrong.contains("card"));
        assert!(!wrong.contains("matched"));
    }

    #[test]
    fn hidden_cards_do_not_leak_their_symbol() {
        assert_eq!(card_label(CardFace::Hidden), "?");
        assert_eq!(card_label(CardFace::Wrong(HEART)), "💕");
        assert_eq!(card_label(CardFace::Matched(HEART)), "💕");
    }

    #[test]
    fn mute_icon_follows_preference() {
        assert_eq!(mute_icon(false), "🔊");
        assert_eq!(mute_icon(true), "🔇");
    }
}
