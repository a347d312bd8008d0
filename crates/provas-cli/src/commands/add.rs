use provas_client::{OptionLoader, SubmissionGateway, SubmitOutcome, submission::notice_for};
use provas_core::selection::DraftController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::{AppContext, NOT_SIGNED_IN};
use crate::output::notify;
use crate::progress::with_spinner;

/// Handle `provas add`.
pub async fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut controller = draft_from_args(args);

    if controller.draft().is_complete() {
        warn_if_not_offered(&controller, ctx).await;
    }

    let gateway = SubmissionGateway::new(&ctx.client, ctx.credential());
    let result = with_spinner("Submitting test", gateway.submit(&mut controller)).await;

    let notice = notice_for(&result);
    match result {
        Ok(SubmitOutcome::Created) => {
            if let Some(notice) = notice {
                notify(&notice, flags);
            }
            Ok(())
        }
        Ok(SubmitOutcome::NotReady) => anyhow::bail!(NOT_SIGNED_IN),
        Err(error) => {
            let notice = notice.unwrap_or_else(|| error.notice());
            Err(super::reported(&notice, error, flags))
        }
    }
}

/// Fill the form the way a user would: discipline first, then the rest.
fn draft_from_args(args: &AddArgs) -> DraftController {
    let mut controller = DraftController::new();
    if let Some(discipline) = args.discipline {
        controller.set_discipline(discipline);
    }
    if let Some(teacher) = args.teacher {
        controller.set_teacher(teacher);
    }
    if let Some(category) = args.category {
        controller.set_category(category);
    }
    if let Some(name) = &args.name {
        controller.set_name(name.as_str());
    }
    if let Some(pdf_url) = &args.pdf_url {
        controller.set_pdf_url(pdf_url.as_str());
    }
    controller
}

/// The form would not offer a teacher outside the chosen discipline. The
/// backend has the final word, so this only warns.
async fn warn_if_not_offered(controller: &DraftController, ctx: &AppContext) {
    let mut loader = OptionLoader::new();
    if let Err(error) = loader.load(&ctx.client, ctx.credential()).await {
        tracing::warn!(%error, "could not load form options; skipping eligibility hint");
        return;
    }

    let Some(options) = loader.options() else {
        return;
    };

    let draft = controller.draft();
    if controller.selected_discipline(options).is_none() {
        tracing::warn!(discipline_id = draft.discipline_id, "discipline is not in the form options");
    } else if controller.selected_teacher(options).is_none() {
        tracing::warn!(
            teacher_id = draft.teacher_id,
            discipline_id = draft.discipline_id,
            "teacher is not offered for this discipline"
        );
    }
    if controller.selected_category(options).is_none() {
        tracing::warn!(category_id = draft.category_id, "category is not in the form options");
    }
}
