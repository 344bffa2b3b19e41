//! HTTP handlers: page dispatch through the route table, template rendering, health.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use parking_lot::Mutex;

use crate::route::{Page, Route, RouteTable};
use crate::util::id::{generate_room_id, RandomSource, RoomToken};

#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable<Page>>,
    random: Arc<Mutex<Box<dyn RandomSource>>>,
}

/// Per-mount values: one page load of the app gets one fresh room ID.
#[derive(Debug, Clone)]
pub struct Mount {
    pub room_id: RoomToken,
}

impl AppState {
    pub fn new(routes: RouteTable<Page>, random: Box<dyn RandomSource>) -> Self {
        Self { routes: Arc::new(routes), random: Arc::new(Mutex::new(random)) }
    }

    pub fn mount(&self) -> Mount {
        let room_id = generate_room_id(&mut **self.random.lock());
        Mount { room_id }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    room_id: String,
}

#[derive(Template)]
#[template(path = "room.html")]
struct RoomTemplate {
    room_id: String,
}

pub async fn healthz() -> &'static str { "ok" }

/// Fallback for every path not claimed by an API or asset route.
pub async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let path = uri.path();
    match Route::resolve(&state.routes, path) {
        Route::Landing => {
            let mount = state.mount();
            tracing::debug!(
                path,
                room_id = %mount.room_id,
                value = mount.room_id.value(),
                "landing mounted"
            );
            LandingTemplate { room_id: mount.room_id.to_string() }.into_response()
        }
        Route::Room { room_id } => {
            tracing::info!(%room_id, "room view");
            RoomTemplate { room_id }.into_response()
        }
        Route::RedirectLanding => {
            tracing::debug!(path, "no room id, back to landing");
            Redirect::to("/").into_response()
        }
    }
}
