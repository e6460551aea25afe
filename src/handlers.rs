use crate::domain::{build_month_series, days_in_month, last_weight_entry, progress_toward_goal, upsert_weight_entry};
use crate::errors::AppError;
use crate::models::{
    AddPersonRequest, AppData, LastEntryInfo, LogWeightRequest, MonthInfo, OverviewResponse,
    Person, PersonSummary, SeriesLine, WeightEntry,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use std::path::Path;
use tracing::error;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.visible_month.label()))
}

pub async fn get_overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_overview(&data)))
}

pub async fn add_person(
    State(state): State<AppState>,
    Json(payload): Json<AddPersonRequest>,
) -> Result<Json<Person>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    check_weight(payload.initial_weight)?;
    check_weight(payload.goal_weight)?;

    let person = Person {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        initial_weight: payload.initial_weight,
        goal_weight: payload.goal_weight,
    };

    let mut data = state.data.lock().await;
    let mut persons = data.persons.clone();
    persons.push(person.clone());
    *data = AppData {
        persons,
        ..data.clone()
    };

    persist_best_effort(&state.data_path, &data).await;

    Ok(Json(person))
}

pub async fn log_weight(
    State(state): State<AppState>,
    Json(payload): Json<LogWeightRequest>,
) -> Result<Json<WeightEntry>, AppError> {
    check_weight(payload.weight)?;

    // A fresh id is assigned even when the entry replaces an existing day.
    let entry = WeightEntry {
        id: Uuid::new_v4().to_string(),
        person_id: payload.person_id,
        date: payload.date,
        weight: payload.weight,
    };

    let mut data = state.data.lock().await;
    *data = AppData {
        weight_history: upsert_weight_entry(&data.weight_history, entry.clone()),
        ..data.clone()
    };

    persist_best_effort(&state.data_path, &data).await;

    Ok(Json(entry))
}

pub async fn month_next(State(state): State<AppState>) -> Result<Json<MonthInfo>, AppError> {
    let mut data = state.data.lock().await;
    *data = AppData {
        visible_month: data.visible_month.next(),
        ..data.clone()
    };

    persist_best_effort(&state.data_path, &data).await;

    Ok(Json(month_info(&data)))
}

pub async fn month_prev(State(state): State<AppState>) -> Result<Json<MonthInfo>, AppError> {
    let mut data = state.data.lock().await;
    *data = AppData {
        visible_month: data.visible_month.prev(),
        ..data.clone()
    };

    persist_best_effort(&state.data_path, &data).await;

    Ok(Json(month_info(&data)))
}

fn check_weight(weight: f64) -> Result<(), AppError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(AppError::bad_request("weight must be a positive number"))
    }
}

// Storage is a best-effort convenience cache; a failed write is logged and
// the request still succeeds.
async fn persist_best_effort(path: &Path, data: &AppData) {
    if let Err(err) = persist_data(path, data).await {
        error!("failed to persist state: {err}");
    }
}

fn month_info(data: &AppData) -> MonthInfo {
    MonthInfo {
        year: data.visible_month.year,
        month: data.visible_month.month,
        label: data.visible_month.label(),
        days: days_in_month(data.visible_month),
    }
}

fn build_overview(data: &AppData) -> OverviewResponse {
    let persons = data
        .persons
        .iter()
        .map(|person| {
            let last = last_weight_entry(&data.weight_history, person);
            PersonSummary {
                id: person.id.clone(),
                name: person.name.clone(),
                initial_weight: person.initial_weight,
                goal_weight: person.goal_weight,
                last_entry: last.map(|entry| LastEntryInfo {
                    date: entry.date,
                    weight: entry.weight,
                }),
                progress_pct: progress_toward_goal(person, last),
            }
        })
        .collect();

    let lines = build_month_series(&data.weight_history, data.visible_month)
        .into_iter()
        .map(|(person_id, points)| {
            let name = data
                .persons
                .iter()
                .find(|person| person.id == person_id)
                .map(|person| person.name.clone())
                .unwrap_or_else(|| person_id.clone());
            SeriesLine {
                person_id,
                name,
                points,
            }
        })
        .collect();

    OverviewResponse {
        month: month_info(data),
        persons,
        lines,
    }
}
