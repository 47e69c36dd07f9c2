//! Preferences window regions: the menu and every settings panel.

use crate::engine::{Region, RuleSet, SubstitutionMap};

const PREFERENCES_MENU: &[(&str, &str)] = &[
    ("What's New", "新着情報"),
    ("Account", "アカウント"),
    ("General", "一般"),
    ("Security", "セキュリティ"),
    ("Backups", "バックアップ"),
    ("Appearance", "外観"),
    ("Listed", "Listed（公開）"),
    ("Plugins", "プラグイン"),
    ("Help & feedback", "ヘルプとフィードバック"),
    ("Preferences Menu", "設定メニュー"),
];

pub(super) fn preferences_menu() -> Region {
    Region::new(
        "preferences-menu",
        &[".preferences-menu-item, [aria-label=\"Preferences Menu\"], [aria-labelledby]"],
        SubstitutionMap::from_pairs(PREFERENCES_MENU),
    )
}

const GENERAL_PANEL: &[(&str, &str)] = &[
    ("When opening the app, show...", "アプリ起動時に表示する内容"),
    ("Defaults", "デフォルト設定"),
    ("New Note Defaults", "新規ノートのデフォルト設定"),
    ("Tools", "ツール"),
    ("Smart Views", "スマートビュー"),
    ("Moments", "モーメンツ"),
    ("Labs", "ラボ"),
    ("The first note in the list", "ノート一覧の最初のノート"),
    ("The last viewed note", "最後に表示していたノート"),
    ("Spellcheck", "スペルチェック"),
    (
        "Add all parent tags when adding a nested tag to a note",
        "ネストタグ追加時に親タグも追加する",
    ),
    (
        "Use always-visible toolbar in Super notes",
        "Superノートでツールバーを常時表示",
    ),
    (
        "Show note saving status while editing",
        "編集中の保存ステータスを表示",
    ),
    ("Upgrade for smart views", "スマートビュー機能のアップグレード"),
    ("Your personal photo journal", "あなたの写真日記"),
    ("Capture Present Moment", "今の瞬間を撮影"),
    (
        "No experimental features available.",
        "利用可能な実験的機能はありません。",
    ),
    (
        "The default spellcheck value for new notes. Spellcheck can be configured per note from the note context menu. Spellcheck may degrade overall typing performance with long notes.",
        "新規ノートのデフォルトのスペルチェック設定です。スペルチェックは各ノートのメニューで個別に設定できます。長いノートでは入力パフォーマンスに影響する可能性があります。",
    ),
    (
        "When enabled, adding a nested tag to a note will automatically add all associated parent tags.",
        "有効にすると、ネストされたタグをノートに追加した際に、親タグも自動的に追加されます。",
    ),
    (
        "When enabled, the Super toolbar will always be shown at the top of the note. It can be temporarily toggled using Cmd/Ctrl+Shift+K. When disabled, the Super toolbar will only be shown as a floating toolbar when text is selected.",
        "有効時は、Superツールバーが常にノートの上部に表示されます（Cmd/Ctrl+Shift+Kで一時的に切り替え可能）。無効時は、テキスト選択時のみフローティング表示されます。",
    ),
    (
        "Control whether the animated saving status is shown while editing. Error statuses are always shown regardless of preference.",
        "編集中にアニメーション付きの保存ステータスを表示するかを制御します。エラーは常に表示されます。",
    ),
    (
        "Create smart views to organize your notes according to conditions you define.",
        "条件を定義して、ノートを整理するためのスマートビューを作成できます。",
    ),
    (
        "Moments lets you capture photos of yourself throughout the day, creating a visual record of your life, one photo at a time. Using your webcam or mobile selfie-cam, Moments takes a photo of you every half hour. All photos are end-to-end encrypted and stored in your files. Enable Moments on a per-device basis to get started.",
        "Momentsは1日に複数回、自動的にあなたの写真を撮影し、ライフログとして視覚的に記録します。Webカメラやスマホの自撮りカメラを使用し、30分ごとに写真を撮影します。すべての写真はエンドツーエンド暗号化され、ファイルに保存されます。各デバイスで有効化できます。",
    ),
];

pub(super) fn general_panel() -> Region {
    Region::new(
        "general-panel",
        &["h1, h2, h4, label, p, button, div.text-base, div.text-sm"],
        SubstitutionMap::from_pairs(GENERAL_PANEL),
    )
}

const SECURITY_PANEL: &[(&str, &str)] = &[
    ("Encryption", "暗号化"),
    ("Protections", "保護機能"),
    ("Two-factor authentication", "二要素認証"),
    ("Passcode lock", "パスコードロック"),
    ("Privacy", "プライバシー"),
    (
        "End-to-end encryption is enabled. Your data is encrypted on your device first, then synced to your private cloud.",
        "エンドツーエンド暗号化が有効になっています。データはまずデバイス上で暗号化され、その後プライベートクラウドに同期されます。",
    ),
    ("Protections are enabled.", "保護機能は有効です。"),
    (
        "Actions like viewing or searching protected notes, exporting decrypted backups, or revoking an active session require additional authentication such as entering your account password or application passcode.",
        "保護されたノートの閲覧や検索、復号化されたバックアップのエクスポート、有効なセッションの取り消しなどの操作には、アカウントのパスワードまたはアプリのパスコードによる追加認証が必要です。",
    ),
    (
        "An extra layer of security when logging in to your account.",
        "アカウントへのログイン時に追加のセキュリティを提供します。",
    ),
    (
        "Add a passcode to lock the application and encrypt on-device key storage.",
        "パスコードを設定してアプリケーションをロックし、デバイス上のキー保管を暗号化します。",
    ),
    ("Session user agent logging", "セッションのユーザーエージェント記録"),
    (
        "User agent logging allows you to identify the devices or browsers signed into your account. For increased privacy, you can disable this feature, which will remove all saved user agent values from our server, and disable future logging of this value.",
        "ユーザーエージェントの記録により、アカウントにサインインしているデバイスやブラウザを識別できます。プライバシーを強化するためにこの機能を無効にすると、保存された記録がサーバーから削除され、今後の記録も停止されます。",
    ),
    ("notes", "件のノート"),
    ("files", "件のファイル"),
    ("tags", "件のタグ"),
    ("archived notes", "件のアーカイブされたノート"),
    ("trashed notes", "件のゴミ箱内ノート"),
    ("Add passcode", "パスコードを追加"),
];

/// Item-count labels (`1876 notes` and friends) live in the same panel,
/// so the count rule runs against each label's composed text.
pub(super) fn security_panel() -> Region {
    Region::new(
        "security-panel",
        &["h1, h2, h4, p, button, div.text-sm, div.text-base"],
        SubstitutionMap::from_pairs(SECURITY_PANEL),
    )
    .with_whole_element()
    .with_rules(RuleSet::ITEM_COUNTS)
}

const BACKUPS_PANEL: &[(&str, &str)] = &[
    ("Data backups", "データバックアップ"),
    ("Automatic text backups", "自動テキストバックアップ"),
    ("Automatic plaintext backups", "自動プレーンテキストバックアップ"),
    ("Automatic file backups", "自動ファイルバックアップ"),
    ("Email backups", "メールバックアップ"),
    (
        "Download a backup of all your text-based data",
        "すべてのテキストデータのバックアップをダウンロード",
    ),
    ("Encrypted", "暗号化済み"),
    ("Decrypted", "復号化済み"),
    (
        "Import a previously saved backup file",
        "保存済みバックアップファイルのインポート",
    ),
    (
        "Automatically save encrypted and decrypted backups of your note and tag data.",
        "ノートおよびタグの暗号化・復号化バックアップを自動的に保存します。",
    ),
    (
        "To enable text backups, use the Standard Notes desktop application.",
        "テキストバックアップを有効にするには、Standard Notesのデスクトップアプリをご使用ください。",
    ),
    (
        "Automatically save backups of all your notes into plaintext, non-encrypted folders.",
        "すべてのノートをプレーンテキスト（暗号化なし）でフォルダにバックアップします。",
    ),
    (
        "Automatically save encrypted backups of your files.",
        "ファイルの暗号化バックアップを自動保存します。",
    ),
    (
        "To enable file backups, use the Standard Notes desktop application.",
        "ファイルバックアップを有効にするには、Standard Notesのデスクトップアプリをご使用ください。",
    ),
    (
        "To decrypt a backup file, drag and drop the file's respective metadata.sn.json file here or select it below.",
        "バックアップファイルを復号化するには、対応する metadata.sn.json をここにドラッグ＆ドロップするか、下から選択してください。",
    ),
    (
        "Receive daily encrypted email backups of all your notes directly in your email inbox.",
        "すべてのノートの暗号化メールバックアップを、毎日あなたの受信箱に直接送信します。",
    ),
    ("Frequency", "頻度"),
    ("How often to receive backups.", "バックアップの受信頻度を選択してください。"),
    ("No email backups", "メールバックアップなし"),
    ("Daily", "毎日"),
    ("Weekly", "毎週"),
    ("Download backup", "バックアップをダウンロード"),
    ("Import backup", "バックアップをインポート"),
    ("Select file", "ファイルを選択"),
];

pub(super) fn backups_panel() -> Region {
    Region::new(
        "backups-panel",
        &["h1, h2, h3, h4, p, span, button, div.text-base, div.text-sm"],
        SubstitutionMap::from_pairs(BACKUPS_PANEL),
    )
    .with_whole_element()
}

const APPEARANCE_PANEL: &[(&str, &str)] = &[
    ("Themes", "テーマ"),
    ("Editor", "エディタ"),
    ("Disable translucent UI", "半透明UIを無効化"),
    (
        "Use opaque style for UI elements instead of translucency",
        "UI要素を半透明ではなく不透明で表示します",
    ),
    ("Use system color scheme", "システムのカラースキームを使用"),
    (
        "Automatically change active theme based on your system settings.",
        "システム設定に基づいてテーマを自動的に変更します",
    ),
    ("Automatic Light Theme", "ライトモードの自動テーマ"),
    (
        "Theme to be used for system light mode:",
        "システムのライトモードで使用するテーマ:",
    ),
    ("Automatic Dark Theme", "ダークモードの自動テーマ"),
    (
        "Theme to be used for system dark mode:",
        "システムのダークモードで使用するテーマ:",
    ),
    ("Default", "デフォルト"),
    ("Dark", "ダーク"),
    ("Autobiography", "オートバイオグラフィー"),
    ("Carbon", "カーボン"),
    ("Futura", "フューチュラ"),
    ("Midnight", "ミッドナイト"),
    ("Solarized Dark", "ソラライズドダーク"),
    ("Titanium", "チタニウム"),
    ("Monospace Font", "等幅フォント"),
    (
        "Toggles the font style in plaintext and Super notes",
        "プレーンテキストおよびSuperノートのフォントを等幅に切り替えます",
    ),
    ("Font size", "フォントサイズ"),
    (
        "Sets the font size in plaintext and Super notes",
        "プレーンテキストおよびSuperノートのフォントサイズを設定します",
    ),
    ("Line height", "行間"),
    (
        "Sets the line height (leading) in plaintext and Super notes",
        "プレーンテキストおよびSuperノートの行間（行送り）を設定します",
    ),
    ("Editor width", "エディタの幅"),
    (
        "Sets the max editor width for all notes",
        "すべてのノートに対する最大エディタ幅を設定します",
    ),
    ("ExtraSmall", "極小"),
    ("Small", "小"),
    ("Normal", "標準"),
    ("Medium", "中"),
    ("Large", "大"),
    ("None", "なし"),
    ("Tight", "狭い"),
    ("Snug", "やや狭い"),
    ("Relaxed", "やや広い"),
    ("Loose", "広い"),
    ("Full width", "全幅"),
];

pub(super) fn appearance_panel() -> Region {
    Region::new(
        "appearance-panel",
        &["h2, h4, p, div.text-base, div.text-sm, button, label"],
        SubstitutionMap::from_pairs(APPEARANCE_PANEL),
    )
}

const ACCOUNT_PANEL: &[(&str, &str)] = &[
    ("Credentials", "認証情報"),
    ("Email", "メールアドレス"),
    ("Password", "パスワード"),
    ("Sync", "同期"),
    ("Subscription", "サブスクリプション"),
    ("Subscription sharing", "サブスクリプション共有"),
    ("Sign out", "サインアウト"),
    ("Delete account", "アカウント削除"),
    ("Change email", "メールアドレスを変更"),
    ("Change password", "パスワードを変更"),
    ("Sync now", "今すぐ同期"),
    ("Subscribe", "購読する"),
    ("Upgrade", "アップグレード"),
    ("Learn More", "詳細を見る"),
    ("Sign out other sessions", "他のセッションをサインアウト"),
    ("Manage sessions", "セッションを管理"),
    ("Sign out workspace", "ワークスペースからサインアウト"),
    ("Delete my account", "アカウントを削除"),
    ("You're signed in as", "サインイン中："),
    ("Current password was set on", "現在のパスワードの設定日："),
    ("Last synced", "最終同期："),
    (
        "You don't have a Standard Notes subscription yet.",
        "まだStandard Notesのサブスクリプションに加入していません。",
    ),
    (
        "Subscription sharing is available only on the",
        "サブスクリプション共有は",
    ),
    (
        "plan. Please upgrade in order to share your subscription.",
        "プランでのみ利用可能です。共有するにはアップグレードしてください。",
    ),
    (
        "Sign-in notification emails are available only on a",
        "サインイン通知メールは",
    ),
    (
        "plan. Please upgrade in order to enable sign-in notifications.",
        "プランでのみ利用可能です。有効にするにはアップグレードが必要です。",
    ),
    ("Mute sign-in notification emails", "サインイン通知メールをミュート"),
    ("Mute marketing notification emails", "マーケティング通知メールをミュート"),
    (
        "Disables email notifications with special deals and promotions.",
        "特別オファーやプロモーションに関する通知メールを無効にします。",
    ),
    ("Other devices", "他のデバイス"),
    (
        "Want to sign out on all devices except this one?",
        "このデバイス以外からすべてサインアウトしますか？",
    ),
    ("This workspace", "このワークスペース"),
    (
        "Remove all data related to the current workspace from the application.",
        "現在のワークスペースに関連するすべてのデータをアプリケーションから削除します。",
    ),
    (
        "This action is irreversible. After deletion completes, you will be signed out on all devices.",
        "この操作は取り消せません。削除後、すべてのデバイスでサインアウトされます。",
    ),
];

pub(super) fn account_panel() -> Region {
    Region::new(
        "account-panel",
        &["h2, h4, p, span, button, a, div.text-base, div.text-sm, div.font-bold"],
        SubstitutionMap::from_pairs(ACCOUNT_PANEL),
    )
}

const LISTED_PANEL: &[(&str, &str)] = &[
    ("About Listed", "Listedについて"),
    ("What is Listed?", "Listedとは？"),
    ("Get Started", "始め方"),
    (
        "Listed is a free blogging platform that allows you to create a public journal published directly from your notes.",
        "Listedは、ノートから直接公開日記を作成できる無料のブログプラットフォームです。",
    ),
    (
        "Create a free Listed author account to get started.",
        "無料のListed作成者アカウントを作成して始めましょう。",
    ),
    ("Learn more", "詳細を見る"),
    ("Create new author", "新しい作成者アカウントを作成"),
];

pub(super) fn listed_panel() -> Region {
    Region::new(
        "listed-panel",
        &["h2, h4, p, a, button"],
        SubstitutionMap::from_pairs(LISTED_PANEL),
    )
}

const HELP_PANEL: &[(&str, &str)] = &[
    ("Frequently asked questions", "よくある質問"),
    ("Community forum", "コミュニティフォーラム"),
    ("Community groups", "コミュニティグループ"),
    ("Account related issue?", "アカウントに関する問題？"),
    (
        "Who can read my private notes?",
        "自分のプライベートノートを読めるのは誰ですか？",
    ),
    (
        "Can I collaborate with others on a note?",
        "他人とノートを共同編集できますか？",
    ),
    (
        "Can I use Standard Notes totally offline?",
        "Standard Notesを完全にオフラインで使えますか？",
    ),
    (
        "Can’t find your question here?",
        "ここにない質問がありますか？",
    ),
    (
        "Quite simply: no one but you. Not us, not your ISP, not a hacker, and not a government agency. As long as you keep your password safe, and your password is reasonably strong, then you are the only person in the world with the ability to decrypt your notes. For more on how we handle your privacy and security, check out our easy to read",
        "簡単に言えば、あなた以外の誰も読むことはできません。私たちも、あなたのISPも、ハッカーも、政府機関も含みません。パスワードを安全に保ち、十分に強固なものであれば、ノートを復号できるのは世界であなただけです。プライバシーとセキュリティに関する詳細は、読みやすいこちらをご覧ください：",
    ),
    (
        "Because of our encrypted architecture, Standard Notes does not currently provide a real-time collaboration solution. Multiple users can share the same account however, but editing at the same time may result in sync conflicts, which may result in the duplication of notes.",
        "当サービスの暗号化アーキテクチャにより、現在リアルタイムでの共同編集には対応していません。ただし、同じアカウントを複数人で共有することは可能ですが、同時編集すると同期競合が発生し、ノートが重複する可能性があります。",
    ),
    (
        "Standard Notes can be used totally offline without an account, and without an internet connection. You can find",
        "Standard Notesはアカウントなし・インターネット接続なしでも完全にオフラインで使用できます。詳しくは",
    ),
    (
        "If you have an issue, found a bug or want to suggest a feature, you can browse or post to the forum. It’s recommended for non-account related issues.",
        "問題の報告やバグの発見、機能の提案などがある場合は、フォーラムを閲覧または投稿してください。アカウントに関連しない内容に推奨されます。",
    ),
    (
        "Want to meet other passionate note-takers and privacy enthusiasts? Want to share your feedback with us? Join the Standard Notes Discord for discussions on security, themes, editors and more.",
        "他の熱心なノート愛用者やプライバシーに関心のある人と交流したいですか？フィードバックを共有したいですか？セキュリティ、テーマ、エディタなどについて議論するためにDiscordコミュニティに参加しましょう。",
    ),
    (
        "Send an email to help@standardnotes.com and we’ll sort it out.",
        "help@standardnotes.com にメールを送ってください。私たちが対応いたします。",
    ),
    ("Learn more", "詳細を見る"),
    ("more details here.", "こちらをご覧ください。"),
    ("Open FAQ", "FAQを開く"),
    ("Go to the forum", "フォーラムへ移動"),
    ("Join our Discord", "Discordに参加する"),
    ("Email us", "メールを送る"),
];

pub(super) fn help_panel() -> Region {
    Region::new(
        "help-panel",
        &["h2, h4, p, a, button"],
        SubstitutionMap::from_pairs(HELP_PANEL),
    )
}

pub(super) fn regions() -> Vec<Region> {
    vec![
        preferences_menu(),
        general_panel(),
        security_panel(),
        backups_panel(),
        appearance_panel(),
        account_panel(),
        listed_panel(),
        help_panel(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::engine::rescan;

    #[test]
    fn test_security_panel_item_counts() {
        let doc = Document::new();
        let label = doc.append_element(doc.root(), "div");
        doc.set_attr(label, "class", "text-sm");
        doc.append_text(label, "1876 notes");

        rescan(&doc, &security_panel());
        assert_eq!(doc.text_content(label), "1876 件のノート");

        // A bare unit label uses the exact-match table instead.
        let bare = doc.append_element(doc.root(), "div");
        doc.set_attr(bare, "class", "text-sm");
        doc.append_text(bare, "archived notes");
        rescan(&doc, &security_panel());
        assert_eq!(doc.text_content(bare), "件のアーカイブされたノート");
    }

    #[test]
    fn test_backups_panel_split_heading() {
        let doc = Document::new();
        let heading = doc.append_element(doc.root(), "h2");
        doc.append_text(heading, "Email ");
        let span = doc.append_element(heading, "span");
        doc.append_text(span, "backups");

        rescan(&doc, &backups_panel());
        assert_eq!(doc.text_content(heading), "メールバックアップ");
    }

    #[test]
    fn test_help_panel_long_paragraph() {
        let doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, "Send an email to help@standardnotes.com and we’ll sort it out.");

        rescan(&doc, &help_panel());
        assert_eq!(
            doc.text_content(p),
            "help@standardnotes.com にメールを送ってください。私たちが対応いたします。"
        );
    }
}
