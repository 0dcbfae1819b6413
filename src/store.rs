// src/store.rs
//
// Dataset loading. Each directory page has a fixed, enumerable list of
// JSON source files (regions is split across shards); loading reads every
// source in order and concatenates into one in-memory collection, no
// deduplication. Sources missing locally are fetched from the site and
// cached into the data dir first, so subsequent runs are offline.
//
// A load either fully succeeds or fails as a whole: one unreadable shard
// fails the domain. Nothing downstream touches a partially loaded set.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use crate::config::consts::{
    DATA_HOST, DATA_PREFIX, JITTER_MS, REGION_SHARDS, REQUEST_PAUSE_MS, WORKERS,
};
use crate::config::options::DomainKind;
use crate::core::net;
use crate::error::Error;
use crate::progress::Progress;
use crate::record::Record;

/// Source file names for one domain, in merge order.
pub fn source_files(kind: DomainKind) -> Vec<String> {
    match kind {
        DomainKind::Regions => (1..=REGION_SHARDS)
            .map(|i| format!("regionsdata_{i}.json"))
            .collect(),
        DomainKind::Industries => vec![s!("industriesdata.json")],
        DomainKind::DatePosted => vec![s!("datepostedata.json")],
    }
}

/// Load a domain's collection from local files only.
pub fn load(kind: DomainKind, data_dir: &Path) -> Result<Vec<Record>, Error> {
    let mut merged: Vec<Record> = Vec::new();
    for name in source_files(kind) {
        let path = data_dir.join(&name);
        let text = fs::read_to_string(&path).map_err(|e| Error::load(&name, e))?;
        let mut records = parse_records(&name, &text)?;
        merged.append(&mut records);
    }
    logf!("Store: Loaded {:?} ({} records)", kind, merged.len());
    Ok(merged)
}

/// Load a domain, fetching any missing source files first.
/// `refresh` re-fetches everything regardless of local state.
pub fn load_or_fetch(
    kind: DomainKind,
    data_dir: &Path,
    refresh: bool,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>, Error> {
    let missing: Vec<String> = source_files(kind)
        .into_iter()
        .filter(|name| refresh || !data_dir.join(name).exists())
        .collect();

    if !missing.is_empty() {
        fetch_sources(&missing, data_dir, progress)?;
    }
    load(kind, data_dir)
}

fn parse_records(name: &str, text: &str) -> Result<Vec<Record>, Error> {
    serde_json::from_str::<Vec<Record>>(text).map_err(|e| Error::load(name, e))
}

/// Fetch the given source files from the site and write them into
/// `data_dir`. Shards are pulled by a small worker pool; the merged order
/// is unaffected since each shard lands in its own file.
fn fetch_sources(
    names: &[String],
    data_dir: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(), Error> {
    fs::create_dir_all(data_dir)
        .map_err(|e| Error::load(data_dir.to_string_lossy(), e))?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
    }

    type FetchOk = (usize, String);
    type FetchErr = (usize, String);

    let names_arc: Arc<Vec<String>> = Arc::new(names.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(names.len()).max(1);

    for _ in 0..workers {
        let names = Arc::clone(&names_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= names.len() {
                    break;
                }
                let path = format!("{}{}", DATA_PREFIX, names[i]);
                let result = match net::http_get(DATA_HOST, &path) {
                    Ok(body) => Ok((i, body)),
                    Err(e) => Err((i, e.to_string())),
                };
                let _ = tx.send(result);
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut first_err: Option<Error> = None;

    for _ in 0..names_arc.len() {
        match res_rx.recv() {
            Ok(Ok((i, body))) => {
                let name = &names_arc[i];
                // Reject non-JSON bodies before caching them.
                if let Err(e) = parse_records(name, &body) {
                    loge!("Store: Fetched {} but it did not parse", name);
                    first_err.get_or_insert(e);
                    continue;
                }
                let path: PathBuf = data_dir.join(name);
                match fs::write(&path, &body) {
                    Ok(()) => {
                        logf!("Store: Cached {} → {}", name, path.display());
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(name);
                        }
                    }
                    Err(e) => {
                        loge!("Store: Write failed for {}: {}", name, e);
                        first_err.get_or_insert(Error::load(name, e));
                    }
                }
            }
            Ok(Err((i, msg))) => {
                let name = &names_arc[i];
                loge!("Store: Fetch failed for {}: {}", name, msg);
                first_err.get_or_insert(Error::load(name, msg));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
