//! ランキング表示

use pop_maker_common::{Endpoints, RankingView};

/// ランキング画面の内容をテキストで組み立てる
pub fn render(view: &RankingView, endpoints: &Endpoints) -> String {
    let mut out = String::from("✨ ランキング ✨\n");
    match view {
        RankingView::Loading => out.push_str("データを読み込み中...\n"),
        RankingView::Failed(message) => {
            out.push_str(message);
            out.push('\n');
        }
        RankingView::Loaded(ranking) => {
            let entries = ranking.entries();
            for (i, entry) in entries.iter().enumerate() {
                out.push_str(&format!("{}  {}\n", entry.label(), entry.count_label()));
                out.push_str(&format!("    {}\n", endpoints.image_url(&entry.name)));
                if i + 1 < entries.len() {
                    out.push_str("----\n");
                }
            }
        }
    }
    out
}
