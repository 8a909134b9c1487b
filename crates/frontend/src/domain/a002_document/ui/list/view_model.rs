//! Documents - View Model

use super::file_selection::FileSelection;
use super::list_view::{deleted_text, DocumentListView};
use super::model::{delete_document, fetch_documents, upload_document};
use crate::domain::a001_chat_session::ChatContext;
use crate::shared::notice::{dismiss_notice, post_notice, NoticeBoard, NoticeTone};
use contracts::shared::ActionOutcome;
use leptos::prelude::*;

const UPLOADING_TEXT: &str = "업로드 중...";
const UPLOAD_NETWORK_ERROR_TEXT: &str = "업로드 실패: 서버와 통신할 수 없습니다.";
const DELETE_NETWORK_ERROR_TEXT: &str = "문서 삭제 중 오류가 발생했습니다.";

#[derive(Clone, Copy)]
pub struct DocumentsVm {
    pub documents: RwSignal<DocumentListView>,
    pub selection: RwSignal<FileSelection>,
    pub notices: RwSignal<NoticeBoard>,
    pub is_uploading: RwSignal<bool>,
}

impl DocumentsVm {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(DocumentListView::default()),
            selection: RwSignal::new(FileSelection::default()),
            notices: RwSignal::new(NoticeBoard::new()),
            is_uploading: RwSignal::new(false),
        }
    }

    /// Re-fetches the list and replaces what is shown. Failures are only logged.
    pub fn load(&self, ctx: &ChatContext) {
        let vm = *self;
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            match fetch_documents(&ctx).await {
                Ok(names) => vm.documents.set(DocumentListView::from_names(names)),
                Err(e) => log::error!("Error loading documents: {}", e),
            }
        });
    }

    pub fn delete(&self, ctx: &ChatContext, name: String) {
        let vm = *self;
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            match delete_document(&ctx, &name).await {
                Ok(ActionOutcome::Succeeded(_)) => {
                    post_notice(vm.notices, NoticeTone::Success, deleted_text(&name));
                    vm.load(&ctx);
                }
                Ok(ActionOutcome::Failed(e)) => {
                    post_notice(vm.notices, NoticeTone::Danger, format!("삭제 오류: {}", e));
                }
                Ok(ActionOutcome::Unrecognized) => {
                    log::warn!("delete of {} returned neither success nor error", name);
                }
                Err(e) => {
                    log::error!("Error deleting document: {}", e);
                    post_notice(vm.notices, NoticeTone::Danger, DELETE_NETWORK_ERROR_TEXT);
                }
            }
        });
    }

    /// Sends the file; `on_success` runs after the selection state is reset
    /// so the view can clear the native input.
    pub fn upload(&self, ctx: &ChatContext, file: web_sys::File, on_success: impl FnOnce() + 'static) {
        let vm = *self;
        let ctx = ctx.clone();
        vm.is_uploading.set(true);
        let progress = post_notice(vm.notices, NoticeTone::Info, UPLOADING_TEXT);

        leptos::task::spawn_local(async move {
            let result = upload_document(&ctx, &file).await;
            if let Some(id) = progress {
                dismiss_notice(vm.notices, id);
            }
            vm.is_uploading.set(false);

            match result {
                Ok(ActionOutcome::Succeeded(message)) => {
                    let text = message.unwrap_or_else(|| format!("{} 업로드 완료", file.name()));
                    post_notice(vm.notices, NoticeTone::Success, text);
                    vm.selection.set(FileSelection::NoFileSelected);
                    on_success();
                    vm.load(&ctx);
                }
                Ok(ActionOutcome::Failed(e)) => {
                    post_notice(vm.notices, NoticeTone::Danger, format!("오류: {}", e));
                }
                Ok(ActionOutcome::Unrecognized) => {
                    log::warn!("upload returned neither success nor error");
                }
                Err(e) => {
                    log::error!("Error uploading document: {}", e);
                    post_notice(vm.notices, NoticeTone::Danger, UPLOAD_NETWORK_ERROR_TEXT);
                }
            }
        });
    }
}
