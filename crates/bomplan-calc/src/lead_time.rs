//! 供應商交期解析
//!
//! 交期欄位是自由文字（「14 дней」「10 天」「около 7」），
//! 解析採兩段式容錯：先取開頭連續的數字與小數分隔符，
//! 若取不到任何字元再收集全字串中的數字；仍解析不出整數時回傳 0。

/// 解析供應商交期文字為天數
pub fn parse_supply_days(raw: &str) -> u32 {
    if raw.trim().is_empty() {
        return 0;
    }

    let leading: String = raw
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let digits = if leading.trim().is_empty() {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    } else {
        leading
    };

    digits.parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("14 дней", 14)]
    #[case("дней 7", 7)] // 開頭無數字，退回全字串收集
    #[case("10 天", 10)]
    #[case("около 21 дня", 21)]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("скоро", 0)] // 完全沒有數字
    #[case("7-10 дней", 7)] // 開頭連續段只到第一個非數字字元
    #[case("14.5 дней", 0)] // 開頭段含小數分隔符，整數解析失敗
    #[case("3,5 недели", 0)]
    fn test_parse_supply_days(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_supply_days(raw), expected);
    }
}
