//! Popover and context-menu regions.

use crate::engine::{Region, RuleSet, SubstitutionMap};

const DISPLAY_OPTIONS: &[(&str, &str)] = &[
    ("Display options", "表示オプション"),
    ("Done", "完了"),
    ("Preferences for", "次の設定対象"),
    ("Sort by", "並び替え順"),
    ("Date modified", "変更日"),
    ("Creation date", "作成日"),
    ("Title", "タイトル"),
    ("View", "表示形式"),
    ("Show note preview", "ノートプレビューを表示"),
    ("Show date", "日付を表示"),
    ("Show tags", "タグを表示"),
    ("Show icon", "アイコンを表示"),
    ("Other", "その他"),
    ("Show pinned", "ピン留めを表示"),
    ("Show protected", "保護されたノートを表示"),
    ("Show archived", "アーカイブ済みノートを表示"),
    ("Show trashed", "ゴミ箱内ノートを表示"),
    ("New note defaults", "新規ノートのデフォルト設定"),
    ("Note Type", "ノートタイプ"),
    ("Title Format", "タイトル形式"),
    ("Current date and time", "現在の日時"),
    ("Current note count", "ノート数"),
    ("Custom format", "カスタム形式"),
    ("Empty", "空欄"),
];

pub(super) fn display_options() -> Region {
    Region::new(
        "display-options",
        &["[data-popover], [role=\"menuitemradio\"], [role=\"menuitemcheckbox\"], button, span, div"],
        SubstitutionMap::from_pairs(DISPLAY_OPTIONS),
    )
}

const NOTE_OPTIONS: &[(&str, &str)] = &[
    ("Note history", "ノート履歴"),
    ("Editor width", "エディタ幅"),
    ("Prevent editing", "編集禁止"),
    ("Show preview", "プレビューを表示"),
    ("Password protect", "パスワード保護"),
    ("Change note type", "ノートタイプ変更"),
    ("Add tag", "タグを追加"),
    ("Star", "スターを付ける"),
    ("Pin to top", "トップに固定"),
    ("Export", "エクスポート"),
    ("Duplicate", "複製"),
    ("Archive", "アーカイブ"),
    ("Move to trash", "ゴミ箱に移動"),
    ("Listed actions", "アクション一覧"),
    ("Spellcheck", "スペルチェック"),
    ("Restore", "元に戻す"),
    ("Delete permanently", "完全に削除"),
    ("Empty Trash", "ゴミ箱を空にする"),
    ("Unstar", "お気に入りから外す"),
    ("Unarchive", "アーカイブを解除"),
];

/// Menu entries whose label is sometimes split across inline elements
/// (the danger-styled ones in particular), so the whole-element fallback
/// is on.
pub(super) fn note_options() -> Region {
    Region::new(
        "note-options",
        &["menu [role=\"menuitem\"], [role=\"menuitemcheckbox\"], span.text-danger, div.text-danger"],
        SubstitutionMap::from_pairs(NOTE_OPTIONS),
    )
    .with_whole_element()
}

pub(super) fn trash_count() -> Region {
    Region::new("trash-count", &[".text-xs"], SubstitutionMap::empty())
        .with_whole_element()
        .with_rules(RuleSet::TRASH_COUNT)
}

const ACCOUNT_MENU: &[(&str, &str)] = &[
    ("Account", "アカウント"),
    ("You're signed in as:", "サインイン中:"),
    ("Last synced:", "最終同期:"),
    ("Switch workspace", "ワークスペースを切り替え"),
    ("Account settings", "アカウント設定"),
    ("Import", "インポート"),
    ("Help & feedback", "ヘルプとフィードバック"),
    ("Keyboard shortcuts", "キーボードショートカット"),
    ("Sign out workspace", "ワークスペースからサインアウト"),
];

pub(super) fn account_menu() -> Region {
    Region::new(
        "account-menu",
        &["#account-menu"],
        SubstitutionMap::from_pairs(ACCOUNT_MENU),
    )
}

const QUICK_SETTINGS: &[(&str, &str)] = &[
    ("Appearance", "外観"),
    ("Default", "デフォルト"),
    ("Dark", "ダーク"),
    ("Autobiography", "オートバイオグラフィー"),
    ("Carbon", "カーボン"),
    ("Futura", "フューチュラ"),
    ("Midnight", "ミッドナイト"),
    ("Solarized Dark", "ソラライズドダーク"),
    ("Titanium", "チタニウム"),
    ("Dynamic Panels", "ダイナミックパネル"),
    ("Focus Mode", "フォーカスモード"),
    ("Show Tags Panel", "タグパネルを表示"),
    ("Show Notes Panel", "ノートパネルを表示"),
];

pub(super) fn quick_settings() -> Region {
    Region::new(
        "quick-settings",
        &["[aria-label=\"Quick settings menu\"]"],
        SubstitutionMap::from_pairs(QUICK_SETTINGS),
    )
}

const TAG_CONTEXT_MENU: &[(&str, &str)] = &[
    ("Name", "名前"),
    ("Save tag name", "タグ名を保存"),
    ("Icon", "アイコン"),
    ("Emoji", "絵文字"),
    ("Reset", "リセット"),
    ("Favorite", "お気に入り"),
    ("Unfavorite", "お気に入りから外す"),
    ("Add subtag", "サブタグを追加"),
    ("Delete", "削除"),
    ("Last modified:", "最終更新："),
    ("Created:", "作成日："),
    ("Tag ID:", "タグID："),
    (
        "Use your keyboard to enter or paste in an emoji character.",
        "キーボードで絵文字を入力または貼り付けてください。",
    ),
    (
        "On Windows: Windows key + . to bring up emoji picker.",
        "Windowsでは、Windowsキー + . で絵文字ピッカーを表示できます。",
    ),
];

pub(super) fn tag_context_menu() -> Region {
    Region::new(
        "tag-context-menu",
        &["[data-popover]", "[data-popover] button span"],
        SubstitutionMap::from_pairs(TAG_CONTEXT_MENU),
    )
    .with_attrs()
    .with_whole_element()
}

const LINK_POPOVER: &[(&str, &str)] = &[
    ("Search items to link...", "リンクする項目を検索..."),
    ("Linked Files", "リンク済みファイル"),
    ("Linked Tags", "リンク済みタグ"),
    ("Upload and link file(s)", "ファイルをアップロードしてリンク"),
    ("Unlinked", "未リンク"),
    ("Linked", "リンク済み"),
    ("Create & add tag", "タグを作成して追加"),
];

pub(super) fn link_popover() -> Region {
    Region::new(
        "link-popover",
        &["[data-popover]"],
        SubstitutionMap::from_pairs(LINK_POPOVER),
    )
    .with_attrs()
}

const EDITOR_TITLE_BAR: &[(&str, &str)] = &[
    ("Link tags, notes, files...", "タグ・ノート・ファイルをリンク..."),
    ("Link tags, notes or files", "タグ・ノート・ファイルをリンク"),
    ("Create & add tag", "タグを作成して追加"),
];

/// The linking container carries pill spans whose text must survive
/// untouched; they are excluded wholesale.
pub(super) fn editor_title_bar() -> Region {
    Region::new(
        "editor-title-bar",
        &["#editor-title-bar", ".note-view-linking-container"],
        SubstitutionMap::from_pairs(EDITOR_TITLE_BAR),
    )
    .with_attrs()
    .with_exclude(".inline-flex.bg-contrast.text-text span")
}

pub(super) fn regions() -> Vec<Region> {
    vec![
        display_options(),
        note_options(),
        trash_count(),
        account_menu(),
        quick_settings(),
        tag_context_menu(),
        link_popover(),
        editor_title_bar(),
    ]
}
