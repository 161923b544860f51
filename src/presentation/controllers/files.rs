//! Files controller

use axum::{extract::Path, response::Json};

use crate::presentation::models::FilePathResponse;

/// Echo a file path.
///
/// The wildcard capture keeps embedded `/` separators, so
/// `/files/home/x.txt` yields `home/x.txt` as a single value. The path is
/// never resolved against the filesystem.
#[utoipa::path(
    get,
    path = "/files/{file_path}",
    tag = "files",
    params(
        ("file_path" = String, Path, description = "Path remainder, may contain embedded separators")
    ),
    responses(
        (status = 200, description = "The captured path, echoed verbatim", body = FilePathResponse)
    )
)]
pub async fn read_file(Path(file_path): Path<String>) -> Json<FilePathResponse> {
    Json(FilePathResponse { file_path })
}
