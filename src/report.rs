//! Plain-text project report
//!
//! One line per project, `Id: <id>, Name: <name>`, in the order the service returned them.

use std::io::Write;

use crate::{api::Api, error::Error, models::ProjectList};

/// Writes one line per project and returns the number of lines written
pub fn write_projects<W>(list: &ProjectList, out: &mut W) -> Result<usize, Error>
where
    W: Write + ?Sized,
{
    for project in list {
        writeln!(out, "Id: {}, Name: {}", project.id, project.name)?;
    }
    out.flush()?;

    Ok(list.len())
}

/// Fetch the first page of projects and report them to `out`.
///
/// Failing to build, send, or read the request is reported as a single line on `out`, and the
/// routine returns `Ok(0)` without decoding anything. A body which cannot be decoded is returned
/// as an error, leaving the caller to decide whether to carry on.
///
/// # Example
///
/// ```no_run
/// # use harvest_api::prelude::*;
/// # tokio_test::block_on(async {
/// let client = Client::from_env()?;
///
/// let printed = list_projects(&client, &mut std::io::stdout()).await?;
/// eprintln!("{printed} projects");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// # });
/// ```
pub async fn list_projects<A, W>(api: &A, out: &mut W) -> Result<usize, Error>
where
    A: Api,
    W: Write + ?Sized,
{
    let list = match api.get_projects().await {
        Ok(list) => list,
        Err(error) if error.is_deserialization() => {
            tracing::error!(%error, "Project listing could not be decoded");
            return Err(error);
        }
        Err(error) => {
            tracing::debug!(%error, "Project listing request failed");
            writeln!(out, "{error}")?;
            return Ok(0);
        }
    };

    tracing::debug!(
        count = list.len(),
        total_entries = list.total_entries,
        has_next_page = list.has_next_page(),
        "Received project listing"
    );

    write_projects(&list, out)
}
