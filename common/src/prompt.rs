//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - build_copy_prompt: キャッチコピー案生成用プロンプト
//! - build_pop_prompt: POPデザイン生成用プロンプト

use serde::{Deserialize, Serialize};

const ROLE_LINE: &str = "あなたは「小学生に刺さるPOPコピー＆デザインを作るプロフェッショナル」です。";

/// キャッチコピー作成ルール（フォーム初期値）
pub const DEFAULT_COPY_RULES: &str = "1.短く直感的（8～15文字）
2.友達に話したくなる／笑える／驚く要素を1つ入れる
3.ワクワク・ドキドキ感のある動詞を使う（例：「ひらく」「とぶ」「でてくる」）
4.想像をふくらませる曖昧さを入れる（例：「その先には…!?」）
5.流行ワードや小学生らしい言い回しも可（例：やばい、神、マジ）
6.長すぎ、説明的すぎ、漢字多すぎはNG";

/// キャッチコピー作成ルール
#[derive(Debug, Clone, PartialEq)]
pub struct CopyRules(pub String);

impl Default for CopyRules {
    fn default() -> Self {
        Self(DEFAULT_COPY_RULES.to_string())
    }
}

impl CopyRules {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// POP作成フォームの入力値
///
/// 数値項目もフォームの文字列のまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopParameters {
    pub purpose: String,
    pub width: String,
    pub height: String,
    pub min_chars: String,
    pub max_chars: String,
    pub extra_text: String,
    pub color_scheme: String,
    pub illustration_style: String,
    pub composition: String,
    pub design_info: String,
    pub catch_copy: String,
    /// 出力形式（入力欄は無効化されており、プロンプトには含めない）
    pub output_format: String,
}

impl Default for PopParameters {
    fn default() -> Self {
        Self {
            purpose: "小学生が本を手に取りたくなるような、直感的でワクワクするPOPを作る。コピーと言葉の温度感は小学生のリアルな感覚に寄せる。".into(),
            width: "1536".into(),
            height: "1024".into(),
            min_chars: "8".into(),
            max_chars: "12".into(),
            extra_text: "ひらがな・カタカナ多め。難しい漢字は避ける。".into(),
            color_scheme: "明るく元気な色（赤・オレンジ・黄・水色など）、背景と文字のコントラスト強め".into(),
            illustration_style: "子どもが親しみやすい手描き風・ポップ調。感想に出てきたモチーフやキャラを必ず反映".into(),
            composition: "文字が一目で読め、イラストとバランスよく配置。余白も活かす".into(),
            design_info: "•イラストは感想に出てきた面白いシーンや特徴的なモチーフを反映（例：まんじゅう顔、鏡もちポーズ、魔法の本、回し車など）
•キャラは笑顔や驚きの表情で動きがあるポーズ
•背景や装飾はテーマカラーやモチーフに沿う
•書籍や物語の世界観を崩さず、可愛くポップに仕上げる"
                .into(),
            catch_copy: String::new(),
            output_format: String::new(),
        }
    }
}

impl PopParameters {
    /// 画像生成APIの size パラメータ（"1536x1024" 形式）
    pub fn size_param(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// キャッチコピー案生成プロンプト
///
/// # Arguments
/// * `rules` - コピー作成ルール
/// * `thoughts` - 取り込んだ感想（CSVのデコード結果）
pub fn build_copy_prompt(rules: &CopyRules, thoughts: &str) -> String {
    format!(
        "{ROLE_LINE}
以下の条件と、提供する「小学生による書籍の感想の文字起こし」をもとに、「キャッチコピー」を箇条書きで10個ほど提案をしてください。

コピー作成ルール:{rules}

以下は本を読んだ方々の感想です参考にしてください。
感想:{thoughts}",
        rules = rules.as_str(),
    )
}

/// POPデザイン生成プロンプト
///
/// 各パラメータを固定の順序でテンプレートに埋め込む。空欄は空文字のまま。
pub fn build_pop_prompt(params: &PopParameters, thoughts: &str) -> String {
    format!(
        "{ROLE_LINE}
以下の条件と、提供する「小学生による書籍の感想の文字起こし」をもとに、POPコピーとPOPデザインの提案をしてください。
目的 :{purpose}

POP仕様
・サイズ:幅は{width}px × 高さは{height}px
・文字:文字数は{min}～{max}。 {extra}
・色づかい:{color}
・イラスト／装飾:{illustration}
・構図:{composition}

デザイン作成ルール
・{design}

利用する固定のキャッチコピー文言(必須)
・{catch_copy}

参考データ（感想の文字起こし）
{thoughts}
",
        purpose = params.purpose,
        width = params.width,
        height = params.height,
        min = params.min_chars,
        max = params.max_chars,
        extra = params.extra_text,
        color = params.color_scheme,
        illustration = params.illustration_style,
        composition = params.composition,
        design = params.design_info,
        catch_copy = params.catch_copy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PopParameters {
        PopParameters {
            purpose: "P-目的".into(),
            width: "640".into(),
            height: "480".into(),
            min_chars: "5".into(),
            max_chars: "9".into(),
            extra_text: "X-追加".into(),
            color_scheme: "C-色".into(),
            illustration_style: "I-絵".into(),
            composition: "L-構図".into(),
            design_info: "D-ルール".into(),
            catch_copy: "K-コピー".into(),
            output_format: "O-形式".into(),
        }
    }

    #[test]
    fn test_pop_prompt_contains_values_in_order() {
        let prompt = build_pop_prompt(&fixture(), "T-感想");
        let order = [
            "P-目的", "640", "480", "5", "9", "X-追加", "C-色", "I-絵", "L-構図", "D-ルール",
            "K-コピー", "T-感想",
        ];

        let mut cursor = 0;
        for value in order {
            let found = prompt[cursor..]
                .find(value)
                .unwrap_or_else(|| panic!("{} が順序どおりに見つかりません", value));
            cursor += found + value.len();
        }
    }

    #[test]
    fn test_pop_prompt_template_lines() {
        let prompt = build_pop_prompt(&fixture(), "T-感想");
        assert!(prompt.starts_with(ROLE_LINE));
        assert!(prompt.contains("・サイズ:幅は640px × 高さは480px"));
        assert!(prompt.contains("・文字:文字数は5～9。 X-追加"));
        assert!(prompt.ends_with("参考データ（感想の文字起こし）\nT-感想\n"));
    }

    #[test]
    fn test_pop_prompt_excludes_output_format() {
        let prompt = build_pop_prompt(&fixture(), "");
        assert!(!prompt.contains("O-形式"));
    }

    #[test]
    fn test_pop_prompt_full_text() {
        let params = PopParameters {
            catch_copy: String::new(),
            ..fixture()
        };
        let expected = "あなたは「小学生に刺さるPOPコピー＆デザインを作るプロフェッショナル」です。
以下の条件と、提供する「小学生による書籍の感想の文字起こし」をもとに、POPコピーとPOPデザインの提案をしてください。
目的 :P-目的

POP仕様
・サイズ:幅は640px × 高さは480px
・文字:文字数は5～9。 X-追加
・色づかい:C-色
・イラスト／装飾:I-絵
・構図:L-構図

デザイン作成ルール
・D-ルール

利用する固定のキャッチコピー文言(必須)
・

参考データ（感想の文字起こし）
T-感想
";
        assert_eq!(build_pop_prompt(&params, "T-感想"), expected);
    }

    #[test]
    fn test_pop_prompt_section_breaks() {
        let prompt = build_pop_prompt(&PopParameters::default(), "T");
        assert!(prompt.contains("\n\nPOP仕様\n"));
        assert!(prompt.contains("\n\nデザイン作成ルール\n"));
        assert!(prompt.contains("\n\n利用する固定のキャッチコピー文言(必須)\n"));
        assert!(prompt.contains("\n\n参考データ（感想の文字起こし）\n"));
    }

    #[test]
    fn test_copy_prompt() {
        let rules = CopyRules("短く".into());
        let expected = "あなたは「小学生に刺さるPOPコピー＆デザインを作るプロフェッショナル」です。
以下の条件と、提供する「小学生による書籍の感想の文字起こし」をもとに、「キャッチコピー」を箇条書きで10個ほど提案をしてください。

コピー作成ルール:短く

以下は本を読んだ方々の感想です参考にしてください。
感想:おもしろかった";
        assert_eq!(build_copy_prompt(&rules, "おもしろかった"), expected);
    }

    #[test]
    fn test_default_rules() {
        let rules = CopyRules::default();
        assert!(!rules.is_empty());
        assert!(rules.as_str().starts_with("1.短く直感的"));
        assert_eq!(rules.as_str().lines().count(), 6);
    }

    #[test]
    fn test_size_param() {
        assert_eq!(PopParameters::default().size_param(), "1536x1024");
    }

    #[test]
    fn test_parameters_deserialize_with_defaults() {
        let params: PopParameters = serde_json::from_str(r#"{"catchCopy": "ひらけ！"}"#).unwrap();
        assert_eq!(params.catch_copy, "ひらけ！");
        assert_eq!(params.width, "1536");
    }
}
