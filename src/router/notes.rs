use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    errors::{RestError, RestResult},
    model::note::{Note, NoteDraft},
    state::AppState,
};

pub fn note_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route(
            "/notes",
            get_with(list_notes, list_notes_docs).post_with(create_note, create_note_docs),
        )
        .api_route(
            "/notes/:id",
            get_with(get_note, get_note_docs)
                .put_with(update_note, update_note_docs)
                .delete_with(delete_note, delete_note_docs),
        )
}

/// The route pattern accepts any segment. A segment that doesn't parse as a
/// non-negative id behaves like an unmatched route, not a missing note.
fn parse_note_id(raw: &str) -> RestResult<u64> {
    raw.parse().map_err(|_| RestError::UnknownRoute)
}

async fn list_notes(State(state): State<AppState>) -> impl IntoApiResponse {
    match perform_list(&state) {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_list(state: &AppState) -> RestResult<Vec<Note>> {
    let store = state.notes()?;

    Ok(store.list())
}

fn list_notes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List notes")
        .description("All notes in creation order. Empty store gives an empty array.")
        .tag("Notes")
        .response_with::<200, Json<Vec<Note>>, _>(|res| res.description("Every stored note"))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoApiResponse {
    match perform_get(&state, &id) {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_get(state: &AppState, raw_id: &str) -> RestResult<Note> {
    let id = parse_note_id(raw_id)?;
    let store = state.notes()?;

    store.get(id).ok_or(RestError::NoteNotFound)
}

fn get_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get note")
        .description("A single note by id.")
        .tag("Notes")
        .response_with::<200, Json<Note>, _>(|res| {
            res.example(Note {
                id: 1,
                title: json!("Groceries"),
                content: json!("Milk, eggs"),
            })
        })
        .response_with::<404, (), _>(|res| res.description("No note with that id"))
}

async fn create_note(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> impl IntoApiResponse {
    match perform_create(&state, body.map(|Json(value)| value)) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_create(state: &AppState, body: Option<Value>) -> RestResult<Note> {
    let draft = NoteDraft::from_body(body)?;
    let mut store = state.notes()?;

    Ok(store.insert(draft))
}

fn create_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create note")
        .description(
            "Requires a JSON object with `title` and `content` keys; the values are \
             stored as sent, whatever their type. The id is assigned by the service.",
        )
        .tag("Notes")
        .response_with::<201, Json<Note>, _>(|res| res.description("The created note"))
        .response_with::<400, (), _>(|res| res.description("Body missing or invalid"))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoApiResponse {
    match perform_update(&state, &id, body.map(|Json(value)| value)) {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_update(state: &AppState, raw_id: &str, body: Option<Value>) -> RestResult<Note> {
    let id = parse_note_id(raw_id)?;
    let mut store = state.notes()?;

    // Existence is checked before the payload, so an unknown id answers 404
    // even when the body is also bad.
    if !store.contains(id) {
        return Err(RestError::NoteNotFound);
    }

    let draft = NoteDraft::from_body(body)?;

    store.replace(id, draft).ok_or(RestError::NoteNotFound)
}

fn update_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update note")
        .description(
            "Full replace: both `title` and `content` are required and overwritten; \
             the id never changes. Partial updates are not supported.",
        )
        .tag("Notes")
        .response_with::<200, Json<Note>, _>(|res| res.description("The updated note"))
        .response_with::<400, (), _>(|res| res.description("Body missing or invalid"))
        .response_with::<404, (), _>(|res| res.description("No note with that id"))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoApiResponse {
    match perform_delete(&state, &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_delete(state: &AppState, raw_id: &str) -> RestResult<()> {
    let id = parse_note_id(raw_id)?;
    let mut store = state.notes()?;

    store.remove(id).map(|_| ()).ok_or(RestError::NoteNotFound)
}

fn delete_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete note")
        .description("Removes the note. Its id is never reused.")
        .tag("Notes")
        .response_with::<204, (), _>(|res| res.description("Deleted; no body"))
        .response_with::<404, (), _>(|res| res.description("No note with that id"))
}
