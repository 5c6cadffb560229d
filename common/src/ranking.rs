//! 投票ランキング
//!
//! `get_vote_counts` の {名前: 票数} を票数の降順に並べる。

use serde::Serialize;
use std::collections::BTreeMap;

/// 取得失敗時の表示メッセージ
pub const RANKING_FETCH_ERROR: &str = "データの取得に失敗しました。";

/// 名前 → 票数
pub type VoteCounts = BTreeMap<String, i64>;

/// ランキングの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    /// 1始まりの順位
    pub rank: usize,
    pub name: String,
    pub count: i64,
}

impl RankingEntry {
    /// "1. 名前"
    pub fn label(&self) -> String {
        format!("{}. {}", self.rank, self.name)
    }

    /// "10票"
    pub fn count_label(&self) -> String {
        format!("{}票", self.count)
    }
}

/// 票数降順のランキング
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteRanking {
    entries: Vec<RankingEntry>,
}

impl VoteRanking {
    /// 同数の場合は名前順（BTreeMapの順序を安定ソートで保持）
    pub fn from_counts(counts: VoteCounts) -> Self {
        let mut pairs: Vec<(String, i64)> = counts.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));

        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, count))| RankingEntry {
                rank: i + 1,
                name,
                count,
            })
            .collect();

        Self { entries }
    }

    /// JSONボディからランキングを作る
    pub fn from_json(body: &str) -> crate::Result<Self> {
        let counts: VoteCounts = serde_json::from_str(body)?;
        Ok(Self::from_counts(counts))
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ランキング画面の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingView {
    Loading,
    Failed(String),
    Loaded(VoteRanking),
}

impl RankingView {
    /// 取得結果から画面状態を決める（失敗の内容は表示しない）
    pub fn from_fetch<E>(result: Result<VoteRanking, E>) -> Self {
        match result {
            Ok(ranking) => RankingView::Loaded(ranking),
            Err(_) => RankingView::Failed(RANKING_FETCH_ERROR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ranking: &VoteRanking) -> Vec<(&str, i64)> {
        ranking
            .entries()
            .iter()
            .map(|e| (e.name.as_str(), e.count))
            .collect()
    }

    #[test]
    fn test_sorted_descending() {
        let ranking = VoteRanking::from_json(r#"{"A":3,"B":10,"C":7}"#).unwrap();
        assert_eq!(names(&ranking), vec![("B", 10), ("C", 7), ("A", 3)]);
    }

    #[test]
    fn test_ranks_are_one_based() {
        let ranking = VoteRanking::from_json(r#"{"A":3,"B":10,"C":7}"#).unwrap();
        let ranks: Vec<usize> = ranking.entries().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ranking.entries()[0].label(), "1. B");
        assert_eq!(ranking.entries()[0].count_label(), "10票");
    }

    #[test]
    fn test_ties_keep_name_order() {
        let ranking = VoteRanking::from_json(r#"{"b":1,"a":1,"c":2}"#).unwrap();
        assert_eq!(names(&ranking), vec![("c", 2), ("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_empty_object() {
        let ranking = VoteRanking::from_json("{}").unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_non_count_body_is_error() {
        // ファイルが無いときの {"message": "..."} は票数マップではない
        assert!(VoteRanking::from_json(r#"{"message":"File not found"}"#).is_err());
        assert!(VoteRanking::from_json("not json").is_err());
    }

    #[test]
    fn test_view_from_fetch() {
        let failed = RankingView::from_fetch::<&str>(Err("HTTP Error! status: 500"));
        assert_eq!(failed, RankingView::Failed(RANKING_FETCH_ERROR.to_string()));

        let loaded = RankingView::from_fetch::<()>(Ok(VoteRanking::default()));
        assert!(matches!(loaded, RankingView::Loaded(r) if r.is_empty()));
    }
}
