//! Modal dialog regions.

use crate::engine::{Region, RuleSet, SubstitutionMap};

const CHALLENGE_MODAL: &[(&str, &str)] = &[
    (
        "Authentication is required to approve this note for Listed",
        "このノートをListedに公開するには認証が必要です",
    ),
    ("Account Password", "アカウントのパスワード"),
    ("Show/hide password", "パスワードを表示/非表示"),
    ("Allow protected access for", "保護されたアクセスの許可期間"),
    ("1 Minute", "1分"),
    ("5 Minutes", "5分"),
    ("1 Hour", "1時間"),
    ("1 Week", "1週間"),
    ("Submit", "送信"),
];

/// The auth challenge renders both inside `[role="dialog"]` containers
/// and as standalone labeled inputs, so placeholders and aria-labels are
/// covered alongside text.
pub(super) fn challenge_modal() -> Region {
    Region::new(
        "challenge-modal",
        &[
            "[role=\"dialog\"], [data-dialog]",
            "input[placeholder]",
            "button[aria-label]",
            "label",
        ],
        SubstitutionMap::from_pairs(CHALLENGE_MODAL),
    )
    .with_attrs()
    .with_whole_element()
}

const MOVE_TO_TRASH: &[(&str, &str)] = &[
    ("Move to Trash", "ゴミ箱に移動"),
    ("Cancel", "キャンセル"),
    ("Confirm", "確認"),
];

/// The confirmation prompt embeds the note title, so the title-preserving
/// trash-prompt rule handles the body while the map covers the static
/// title and buttons.
pub(super) fn move_to_trash_modal() -> Region {
    Region::new(
        "move-to-trash-modal",
        &[
            ".sk-modal-content .font-bold.text-lg",
            ".sk-modal-content .sk-p",
            ".sk-modal-content .sk-label",
        ],
        SubstitutionMap::from_pairs(MOVE_TO_TRASH),
    )
    .with_whole_element()
    .with_rules(RuleSet::TRASH_PROMPT)
}

pub(super) fn regions() -> Vec<Region> {
    vec![challenge_modal(), move_to_trash_modal()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::engine::rescan;

    #[test]
    fn test_challenge_modal_labels_and_placeholder() {
        let doc = Document::new();
        let dialog = doc.append_element(doc.root(), "div");
        doc.set_attr(dialog, "role", "dialog");
        let label = doc.append_element(dialog, "label");
        doc.append_text(label, "5 Minutes");
        let input = doc.append_element(dialog, "input");
        doc.set_attr(input, "placeholder", "Account Password");
        let toggle = doc.append_element(dialog, "button");
        doc.set_attr(toggle, "aria-label", "Show/hide password");

        rescan(&doc, &challenge_modal());
        assert_eq!(doc.text_content(label), "5分");
        assert_eq!(doc.attr(input, "placeholder").as_deref(), Some("アカウントのパスワード"));
        assert_eq!(
            doc.attr(toggle, "aria-label").as_deref(),
            Some("パスワードを表示/非表示")
        );
    }

    #[test]
    fn test_move_to_trash_prompt_keeps_note_name() {
        let doc = Document::new();
        let modal = doc.append_element(doc.root(), "div");
        doc.set_attr(modal, "class", "sk-modal-content");
        let title = doc.append_element(modal, "div");
        doc.set_attr(title, "class", "font-bold text-lg");
        doc.append_text(title, "Move to Trash");
        let prompt = doc.append_element(modal, "p");
        doc.set_attr(prompt, "class", "sk-p");
        doc.append_text(prompt, "Are you sure you want to move 'daily log' to the trash?");
        let cancel = doc.append_element(modal, "div");
        doc.set_attr(cancel, "class", "sk-label");
        doc.append_text(cancel, "Cancel");

        rescan(&doc, &move_to_trash_modal());
        assert_eq!(doc.text_content(title), "ゴミ箱に移動");
        assert_eq!(
            doc.text_content(prompt),
            "「daily log」をゴミ箱に移動してもよろしいですか？"
        );
        assert_eq!(doc.text_content(cancel), "キャンセル");

        // Second pass changes nothing.
        let version = doc.structure_version();
        rescan(&doc, &move_to_trash_modal());
        assert_eq!(doc.structure_version(), version);
    }
}
