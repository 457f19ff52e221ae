use crate::errors::AppError;
use crate::models::{
    ActionResponse, BlockerRequest, CognitiveSetupRequest, Habit, InsightsResponse, JournalRequest, MoodRequest,
    OnboardingRequest, PageRequest, PresetsResponse, ReflectionForm, ReflectionResponse, ReflectionStatusResponse,
    SessionResponse, SessionState, TimeOfDay,
};
use crate::page::Page;
use crate::reframe::{EMPTY_REFLECTION_MESSAGE, outcome_message, reframe_reflection};
use crate::session::{PRESET_BLOCKERS, PRESET_HABITS, motivational_message};
use crate::state::{AppState, DashboardView};
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
};
use chrono::Local;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await.clone();
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&session, &dashboard))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(to_session_response(&session))
}

pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    *session = SessionState::default();
    let mut dashboard = state.dashboard.lock().await;
    // An in-flight reframe belongs to the old session: keep it gated, drop its result.
    let (pending, generation) = (dashboard.pending, dashboard.generation.wrapping_add(1));
    *dashboard = DashboardView {
        pending,
        generation,
        ..DashboardView::default()
    };
    info!("session reset");
    Json(to_session_response(&session))
}

pub async fn set_page(
    State(state): State<AppState>,
    Json(payload): Json<PageRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    apply_page(&state, payload.page).await.map(Json)
}

pub async fn set_habit(State(state): State<AppState>, Json(payload): Json<Option<Habit>>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.set_habit_data(payload);
    Json(to_session_response(&session))
}

pub async fn onboarding(
    State(state): State<AppState>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    apply_onboarding(&state, &payload).await.map(Json)
}

pub async fn cognitive_setup(
    State(state): State<AppState>,
    Json(payload): Json<CognitiveSetupRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    apply_cognitive_setup(&state, &payload).await.map(Json)
}

pub async fn set_blocker(
    State(state): State<AppState>,
    Json(payload): Json<BlockerRequest>,
) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.set_blocker(payload.blocker);
    Json(to_session_response(&session))
}

pub async fn set_mood(State(state): State<AppState>, Json(payload): Json<MoodRequest>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.set_mood(payload.mood);
    Json(to_session_response(&session))
}

pub async fn set_journal(
    State(state): State<AppState>,
    Json(payload): Json<JournalRequest>,
) -> Json<SessionResponse> {
    let session = apply_journal(&state, payload.text).await;
    Json(to_session_response(&session))
}

pub async fn complete_habit(State(state): State<AppState>) -> Json<ActionResponse> {
    Json(apply_completion(&state, true).await)
}

pub async fn incomplete_habit(State(state): State<AppState>) -> Json<ActionResponse> {
    Json(apply_completion(&state, false).await)
}

pub async fn submit_reflection(State(state): State<AppState>) -> Result<Json<ReflectionResponse>, AppError> {
    apply_reflection(&state).await.map(Json)
}

pub async fn get_reflection(State(state): State<AppState>) -> Json<ReflectionStatusResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(ReflectionStatusResponse {
        pending: dashboard.pending,
        reframe: dashboard.last.clone(),
    })
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let session = state.session.lock().await;
    Json(InsightsResponse {
        date: today_string(),
        habit: session.habit_name().unwrap_or("No habit set").to_string(),
        streak: session.streak,
        message: motivational_message(session.streak),
    })
}

pub async fn get_presets() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        habits: PRESET_HABITS.iter().map(|habit| habit.to_string()).collect(),
        blockers: PRESET_BLOCKERS.iter().map(|blocker| blocker.to_string()).collect(),
        times: TimeOfDay::ALL.to_vec(),
    })
}

pub async fn navigate_form(State(state): State<AppState>, Form(payload): Form<PageRequest>) -> Redirect {
    let result = apply_page(&state, payload.page).await;
    redirect_home(&state, result).await
}

pub async fn onboarding_form(State(state): State<AppState>, Form(payload): Form<OnboardingRequest>) -> Redirect {
    let result = apply_onboarding(&state, &payload).await;
    redirect_home(&state, result).await
}

pub async fn cognitive_setup_form(
    State(state): State<AppState>,
    Form(payload): Form<CognitiveSetupRequest>,
) -> Redirect {
    let result = apply_cognitive_setup(&state, &payload).await;
    redirect_home(&state, result).await
}

pub async fn complete_form(State(state): State<AppState>) -> Redirect {
    apply_completion(&state, true).await;
    Redirect::to("/")
}

pub async fn incomplete_form(State(state): State<AppState>) -> Redirect {
    apply_completion(&state, false).await;
    Redirect::to("/")
}

pub async fn mood_form(State(state): State<AppState>, Form(payload): Form<MoodRequest>) -> Redirect {
    state.session.lock().await.set_mood(payload.mood);
    Redirect::to("/")
}

pub async fn reflection_form(State(state): State<AppState>, Form(payload): Form<ReflectionForm>) -> Redirect {
    if let Some(journal) = payload.journal {
        apply_journal(&state, journal).await;
    }
    let result = apply_reflection(&state).await;
    redirect_home(&state, result).await
}

async fn apply_onboarding(state: &AppState, payload: &OnboardingRequest) -> Result<SessionResponse, AppError> {
    let mut session = state.session.lock().await;
    session.complete_onboarding(payload.habit.as_deref(), payload.custom_habit.as_deref(), payload.time)?;
    info!(habit = session.habit_name().unwrap_or_default(), "habit chosen");
    state.dashboard.lock().await.notice = None;
    Ok(to_session_response(&session))
}

async fn apply_cognitive_setup(
    state: &AppState,
    payload: &CognitiveSetupRequest,
) -> Result<SessionResponse, AppError> {
    let mut session = state.session.lock().await;
    session.complete_cognitive_setup(payload.blocker.as_deref(), payload.custom_blocker.as_deref())?;
    state.dashboard.lock().await.notice = None;
    Ok(to_session_response(&session))
}

/// A page change clears whatever notice the previous page left behind.
async fn apply_page(state: &AppState, page: Page) -> Result<SessionResponse, AppError> {
    let mut session = state.session.lock().await;
    session.set_page(page)?;
    state.dashboard.lock().await.notice = None;
    Ok(to_session_response(&session))
}

async fn apply_journal(state: &AppState, text: String) -> SessionState {
    let mut session = state.session.lock().await;
    session.set_journal(text);
    state.dashboard.lock().await.notice = None;
    session.clone()
}

async fn apply_completion(state: &AppState, completed: bool) -> ActionResponse {
    let mut session = state.session.lock().await;
    let message = if completed {
        session.mark_completed()
    } else {
        session.mark_incomplete()
    };
    info!(streak = session.streak, completed_today = session.completed_today, "{message}");
    state.dashboard.lock().await.notice = Some(message.to_string());

    ActionResponse {
        message: message.to_string(),
        session: session.clone(),
    }
}

/// Runs the reframe pipeline for the session's journal. Only one request may be in flight.
async fn apply_reflection(state: &AppState) -> Result<ReflectionResponse, AppError> {
    let (journal, habit) = {
        let session = state.session.lock().await;
        (session.journal_text.clone(), session.habit_name().map(str::to_string))
    };

    let generation = {
        let mut dashboard = state.dashboard.lock().await;
        if dashboard.pending {
            return Err(AppError::conflict("A reflection is already being reframed."));
        }
        if journal.trim().is_empty() {
            return Err(AppError::bad_request(EMPTY_REFLECTION_MESSAGE));
        }
        dashboard.pending = true;
        dashboard.notice = None;
        dashboard.last = None;
        dashboard.generation
    };

    // Spawned so the loading flag is cleared even if the caller goes away.
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let reframe = reframe_reflection(&task_state.client, habit.as_deref(), &journal).await;
        let mut dashboard = task_state.dashboard.lock().await;
        dashboard.pending = false;
        if dashboard.generation == generation {
            dashboard.notice = outcome_message(&reframe);
            dashboard.last = Some(reframe.clone());
        } else {
            info!("session was reset, dropping stale reframe");
        }
        reframe
    });

    let reframe = match task.await {
        Ok(reframe) => reframe,
        Err(err) => {
            state.dashboard.lock().await.pending = false;
            return Err(AppError::internal(err));
        }
    };

    Ok(ReflectionResponse {
        message: outcome_message(&reframe),
        reframe,
    })
}

async fn redirect_home<T>(state: &AppState, result: Result<T, AppError>) -> Redirect {
    if let Err(err) = result {
        if err.status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("form action failed: {}", err.message);
        }
        state.dashboard.lock().await.notice = Some(err.message);
    }
    Redirect::to("/")
}

fn to_session_response(session: &SessionState) -> SessionResponse {
    SessionResponse {
        next_pages: session.current_page.next_pages().to_vec(),
        session: session.clone(),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
