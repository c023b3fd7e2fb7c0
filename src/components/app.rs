use super::{
    click_game_view::ClickGameView, confetti_overlay::ConfettiOverlay, invite_view::InviteView,
    photos_view::PhotosView,
};
use crate::fx::Fx;
use crate::model::{GameAction, GameState, PlayerScore};
use crate::storage::{score_store, ScoreStore};
use std::rc::Rc;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Invite,
    ClickGame,
    Photos,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Invite);
    let game = use_reducer(GameState::default);
    // Backend picked once; the handle must survive re-renders so the
    // remote mirror and socket are not rebuilt.
    let store = use_mut_ref(score_store);
    let fx_cell = use_mut_ref(Fx::load);
    let fx: Fx = fx_cell.borrow().clone();

    // One subscription for the whole session; snapshots keep flowing
    // while the user switches views.
    {
        let game = game.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let on_snapshot = Callback::from(move |entries: Vec<PlayerScore>| {
                game.dispatch(GameAction::BoardSnapshot(entries));
            });
            let backend: Rc<dyn ScoreStore> = store.borrow().clone();
            backend.subscribe(on_snapshot);
            || ()
        });
    }
    // Persist the ranked list after every change. An empty board is never
    // written, so a slow first snapshot cannot wipe the stored one.
    {
        let store = store.clone();
        use_effect_with(game.board.clone(), move |board| {
            if !board.is_empty() {
                store.borrow().save_board(board.entries());
            }
            || ()
        });
    }

    let to_invite = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Invite))
    };
    let to_click_game = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::ClickGame))
    };
    let to_photos = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Photos))
    };

    // Session start: the stored score comes back so a returning player
    // resumes instead of starting over.
    let on_start = {
        let game = game.clone();
        let store = store.clone();
        Callback::from(move |raw: String| {
            let nickname = raw.trim().to_string();
            if nickname.is_empty() {
                return;
            }
            let prior = store.borrow().get(&nickname);
            game.dispatch(GameAction::Start {
                nickname,
                prior_score: prior,
            });
        })
    };
    // Cake click: persist the new count, then let the reducer re-rank.
    let on_cake_click = {
        let game = game.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            if !game.started {
                return;
            }
            let next = game.clicks.saturating_add(1);
            store.borrow().set(&game.nickname, next);
            game.dispatch(GameAction::Click);
        })
    };

    let content = match *view {
        View::Invite => html! { <InviteView
            to_click_game={to_click_game.clone()}
            to_photos={to_photos.clone()}
        /> },
        View::ClickGame => html! { <ClickGameView
            game={game.clone()}
            on_start={on_start.clone()}
            on_cake_click={on_cake_click.clone()}
            to_invite={to_invite.clone()}
            to_photos={to_photos.clone()}
        /> },
        View::Photos => html! { <PhotosView to_invite={to_invite.clone()} /> },
    };

    html! {
        <ContextProvider<Fx> context={fx}>
            { content }
            <ConfettiOverlay />
        </ContextProvider<Fx>>
    }
}
