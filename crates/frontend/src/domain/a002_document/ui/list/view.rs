//! Documents - Sidebar with the upload form and the document list

use super::file_selection::FileSelection;
use super::list_view::{delete_confirm_text, DocumentListView, EMPTY_LIST_TEXT};
use super::view_model::DocumentsVm;
use crate::domain::a001_chat_session::ChatContext;
use crate::shared::components::ui::Button as FormButton;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeStack;
use contracts::domain::a002_document::upload::{validate_upload, ALLOWED_EXTENSIONS};
use leptos::prelude::*;

const NO_FILE_ALERT_TEXT: &str = "파일을 선택해주세요.";

fn accept_attr() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentPanel() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext not found");
    let vm = DocumentsVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    vm.load(&ctx);

    let handle_file_change = move |_| {
        let file = file_input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| (file.name(), file.size() as u64));
        vm.selection.set(FileSelection::on_change(file));
    };

    let handle_upload = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(input) = file_input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                alert(NO_FILE_ALERT_TEXT);
                return;
            };
            if let Err(rejection) = validate_upload(&file.name(), file.size() as u64) {
                alert(rejection.message());
                return;
            }
            vm.upload(&ctx, file, move || input.set_value(""));
        }
    };

    let upload_disabled =
        Signal::derive(move || !vm.selection.get().upload_enabled() || vm.is_uploading.get());

    view! {
        <div class="document-panel">
            <h3 class="sidebar-title">{icon("upload")}" 문서 업로드"</h3>

            <form id="uploadForm" class="upload-form" on:submit=handle_upload>
                <label for="fileInput" class="file-input-label">
                    {icon("document")}
                    <span id="fileInputText">{move || vm.selection.get().chooser_label()}</span>
                </label>
                <input
                    node_ref=file_input_ref
                    id="fileInput"
                    type="file"
                    accept=accept_attr()
                    style="display: none;"
                    on:change=handle_file_change
                />

                {move || {
                    vm.selection
                        .get()
                        .selected_name()
                        .map(|name| {
                            view! {
                                <div id="selectedFileName" class="selected-file">
                                    "선택된 파일: "
                                    <span id="fileName">{name.to_string()}</span>
                                </div>
                            }
                        })
                }}

                <FormButton button_type="submit" class="upload-btn" disabled=upload_disabled>
                    {icon("upload")}
                    " 업로드"
                </FormButton>

                <NoticeStack board=vm.notices />
            </form>

            <h3 class="sidebar-title">{icon("document")}" 업로드된 문서"</h3>
            <div id="documentList" class="document-list">
                {move || match vm.documents.get() {
                    DocumentListView::Pending => ().into_any(),
                    DocumentListView::Empty => {
                        view! { <div class="text-muted">{EMPTY_LIST_TEXT}</div> }.into_any()
                    }
                    DocumentListView::Entries(names) => {
                        let ctx = ctx.clone();
                        names
                            .into_iter()
                            .map(|name| view! { <DocumentEntry name=name ctx=ctx.clone() vm=vm /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn DocumentEntry(name: String, ctx: ChatContext, vm: DocumentsVm) -> impl IntoView {
    let handle_delete = Callback::new({
        let name = name.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if confirm(&delete_confirm_text(&name)) {
                vm.delete(&ctx, name.clone());
            }
        }
    });

    view! {
        <div class="document-item">
            <span class="document-name">{name}</span>
            <FormButton variant="icon" class="document-delete-btn" title="문서 삭제" on_click=handle_delete>
                {icon("delete")}
            </FormButton>
        </div>
    }
}
