use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::content;
use crate::logger;
use crate::models::{About, Announcement, Category, Question};

/// What a screen can ask the loader for. Question fetches carry the
/// setting they were issued for, so the answer can be matched back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Categories,
    Announcements,
    About,
    Questions {
        category_id: String,
        setting_index: usize,
        amount: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadResponse {
    Categories(Vec<Category>),
    Announcements(Vec<Announcement>),
    About(Option<About>),
    Questions {
        category_id: String,
        setting_index: usize,
        questions: Vec<Question>,
    },
    /// The content store itself is missing, not just one empty collection.
    Unavailable,
}

/// Spawns the thread that serves every content read, so file access never
/// blocks the draw loop. The thread exits when the request channel closes.
pub fn spawn_loader(
    dir: PathBuf,
    response_tx: Sender<LoadResponse>,
    request_rx: Receiver<LoadRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("exam-reviewer::loader".to_string())
        .spawn(move || loop {
            match request_rx.recv() {
                Ok(LoadRequest::Categories) => {
                    if !content::is_available(&dir) {
                        logger::log(&format!("content store missing at {}", dir.display()));
                        let _ = response_tx.send(LoadResponse::Unavailable);
                        continue;
                    }
                    let categories = content::load_categories(&dir);
                    logger::log(&format!("loaded {} categories", categories.len()));
                    let _ = response_tx.send(LoadResponse::Categories(categories));
                }
                Ok(LoadRequest::Announcements) => {
                    let announcements = content::load_announcements(&dir);
                    let _ = response_tx.send(LoadResponse::Announcements(announcements));
                }
                Ok(LoadRequest::About) => {
                    let about = content::load_about(&dir);
                    let _ = response_tx.send(LoadResponse::About(about));
                }
                Ok(LoadRequest::Questions {
                    category_id,
                    setting_index,
                    amount,
                }) => {
                    let questions = content::fetch_questions(&dir, &category_id, amount);
                    logger::log(&format!(
                        "loaded {} questions for {}",
                        questions.len(),
                        category_id
                    ));
                    let _ = response_tx.send(LoadResponse::Questions {
                        category_id,
                        setting_index,
                        questions,
                    });
                }
                Err(_) => {
                    // Channel disconnected, exit worker
                    logger::log("loader channel disconnected, exiting");
                    break;
                }
            }
        })
        .expect("Failed to spawn loader thread")
}
