//! SOAP response parsing.
//!
//! Responses are read with a pull parser and reduced straight to plain
//! entities. Namespaces are ignored; only local element names matter.

use chrono::{DateTime, NaiveDateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use uuid::Uuid;

use vodbridge_core::{AppError, AppResult};
use vodbridge_entity::{Folder, Session, SessionState};

fn start_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn end_name(e: &BytesEnd<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn parse_error(err: quick_xml::Error) -> AppError {
    AppError::with_source(
        vodbridge_core::error::ErrorKind::ExternalService,
        format!("Malformed response XML: {err}"),
        err,
    )
}

/// Reject responses carrying a SOAP fault.
pub fn check_fault(xml: &str) -> AppResult<()> {
    let mut reader = Reader::from_str(xml);
    let mut in_fault = false;
    let mut in_faultstring = false;
    let mut message = String::new();

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                let name = start_name(&e);
                if name == "Fault" {
                    in_fault = true;
                } else if in_fault && name == "faultstring" {
                    in_faultstring = true;
                }
            }
            Event::Text(t) if in_faultstring => {
                message = t.unescape().map_err(parse_error)?.trim().to_string();
            }
            Event::End(e) => {
                if end_name(&e) == "faultstring" {
                    in_faultstring = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if in_fault || !message.is_empty() {
        let detail = if message.is_empty() {
            "unspecified fault".to_string()
        } else {
            message
        };
        return Err(AppError::external_service(format!(
            "Remote service fault: {detail}"
        )));
    }
    Ok(())
}

/// Extract the text content of the first element with the given local name.
pub fn text_result(xml: &str, element: &str) -> AppResult<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut capture = false;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                if start_name(&e) == element {
                    capture = true;
                }
            }
            Event::Text(t) if capture => {
                let text = t.unescape().map_err(parse_error)?.trim().to_string();
                if !text.is_empty() {
                    return Ok(Some(text));
                }
            }
            Event::End(e) => {
                if end_name(&e) == element {
                    return Ok(None);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(None)
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // WCF sometimes emits zone-less timestamps; they are UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Default)]
struct FolderBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    parent_id: Option<Uuid>,
}

impl FolderBuilder {
    fn finish(self) -> Option<Folder> {
        Some(Folder {
            id: self.id?,
            name: self.name.unwrap_or_default(),
            parent_id: self.parent_id,
        })
    }
}

/// Parse all `Folder` records from a response body.
pub fn parse_folders(xml: &str) -> AppResult<Vec<Folder>> {
    let mut reader = Reader::from_str(xml);
    let mut folders = Vec::new();
    let mut current: Option<FolderBuilder> = None;
    // Depth below the Folder element; fields are direct children only.
    let mut depth = 0usize;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                let name = start_name(&e);
                if current.is_none() {
                    if name == "Folder" {
                        current = Some(FolderBuilder::default());
                        depth = 0;
                        field = None;
                    }
                } else {
                    depth += 1;
                    field = (depth == 1).then_some(name);
                }
            }
            Event::Text(t) => {
                if let (Some(builder), Some(field)) = (current.as_mut(), field.as_deref()) {
                    let text = t.unescape().map_err(parse_error)?.trim().to_string();
                    if text.is_empty() {
                        continue;
                    }
                    match field {
                        "Id" => builder.id = Uuid::parse_str(&text).ok(),
                        "Name" => builder.name = Some(text),
                        "ParentFolder" => builder.parent_id = Uuid::parse_str(&text).ok(),
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                let name = end_name(&e);
                if current.is_some() {
                    if name == "Folder" && depth == 0 {
                        if let Some(folder) = current.take().and_then(FolderBuilder::finish) {
                            folders.push(folder);
                        }
                    } else if depth > 0 {
                        depth -= 1;
                        field = None;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(folders)
}

#[derive(Default)]
struct SessionBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    created_at: Option<DateTime<Utc>>,
    duration_seconds: Option<f64>,
    viewer_url: Option<String>,
    thumb_url: Option<String>,
    folder_id: Option<Uuid>,
    state: Option<SessionState>,
}

impl SessionBuilder {
    fn finish(self) -> Option<Session> {
        Some(Session {
            id: self.id?,
            name: self.name.unwrap_or_default(),
            created_at: self.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            duration_seconds: self.duration_seconds.unwrap_or(0.0),
            viewer_url: self.viewer_url.unwrap_or_default(),
            thumb_url: self.thumb_url.unwrap_or_default(),
            folder_id: self.folder_id,
            state: self.state.unwrap_or(SessionState::Unknown),
        })
    }
}

/// Parse all `Session` records from a response body.
pub fn parse_sessions(xml: &str) -> AppResult<Vec<Session>> {
    let mut reader = Reader::from_str(xml);
    let mut sessions = Vec::new();
    let mut current: Option<SessionBuilder> = None;
    let mut depth = 0usize;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                let name = start_name(&e);
                if current.is_none() {
                    if name == "Session" {
                        current = Some(SessionBuilder::default());
                        depth = 0;
                        field = None;
                    }
                } else {
                    depth += 1;
                    field = (depth == 1).then_some(name);
                }
            }
            Event::Text(t) => {
                if let (Some(builder), Some(field)) = (current.as_mut(), field.as_deref()) {
                    let text = t.unescape().map_err(parse_error)?.trim().to_string();
                    if text.is_empty() {
                        continue;
                    }
                    match field {
                        "Id" => builder.id = Uuid::parse_str(&text).ok(),
                        "Name" => builder.name = Some(text),
                        "StartTime" => builder.created_at = parse_timestamp(&text),
                        "Duration" => builder.duration_seconds = text.parse().ok(),
                        "ViewerUrl" => builder.viewer_url = Some(text),
                        "ThumbUrl" => builder.thumb_url = Some(text),
                        "FolderId" => builder.folder_id = Uuid::parse_str(&text).ok(),
                        "State" => builder.state = Some(SessionState::from_remote(&text)),
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                let name = end_name(&e);
                if current.is_some() {
                    if name == "Session" && depth == 0 {
                        if let Some(session) = current.take().and_then(SessionBuilder::finish) {
                            sessions.push(session);
                        }
                    } else if depth > 0 {
                        depth -= 1;
                        field = None;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sessions)
}
