//! 以空白分隔的记录流。

use drawing_core::geometry::Point2;

use crate::IoError;

/// 顺序读取以空白分隔的 token，并记录当前行号用于报错。
#[derive(Debug)]
pub struct TokenReader<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            line: 1,
        }
    }

    /// 最近一次读取的 token 所在行（从 1 开始）。
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        let mut start = None;
        for (index, ch) in self.rest.char_indices() {
            if ch == '\n' {
                self.line += 1;
            } else if !ch.is_whitespace() {
                start = Some(index);
                break;
            }
        }
        let Some(start) = start else {
            self.rest = "";
            return None;
        };

        let tail = &self.rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (token, rest) = tail.split_at(end);
        self.rest = rest;
        Some(token)
    }

    pub fn expect_token(&mut self, context: &str) -> Result<&'a str, IoError> {
        self.next_token().ok_or_else(|| IoError::InvalidRecord {
            line: self.line,
            message: format!("{context} 缺失（输入提前结束）"),
        })
    }

    pub fn expect_f64(&mut self, context: &str) -> Result<f64, IoError> {
        let raw = self.expect_token(context)?;
        raw.parse::<f64>().map_err(|_| IoError::InvalidRecord {
            line: self.line,
            message: format!("{context} 解析失败（值：\"{raw}\"）"),
        })
    }

    pub fn expect_point(&mut self, context: &str) -> Result<Point2, IoError> {
        let x = self.expect_f64(&format!("{context}.x"))?;
        let y = self.expect_f64(&format!("{context}.y"))?;
        Ok(Point2::new(x, y))
    }

    pub fn expect_text(&mut self, context: &str) -> Result<String, IoError> {
        let raw = self.expect_token(context)?;
        decode_text(raw).map_err(|message| IoError::InvalidRecord {
            line: self.line,
            message: format!("{context}: {message}"),
        })
    }
}

/// 空文本写作单独的 `\0` token。
const EMPTY_TEXT: &str = "\\0";

/// 把任意文本编码为不含空白的单个 token。
pub fn encode_text(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_TEXT.to_string();
    }
    let mut encoded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => encoded.push_str("\\\\"),
            ' ' => encoded.push_str("\\~"),
            '\n' => encoded.push_str("\\P"),
            '\t' => encoded.push_str("\\T"),
            other if other.is_whitespace() => {
                encoded.push_str(&format!("\\u{{{:x}}}", other as u32));
            }
            other => encoded.push(other),
        }
    }
    encoded
}

pub fn decode_text(raw: &str) -> Result<String, String> {
    if raw == EMPTY_TEXT {
        return Ok(String::new());
    }
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('~') => result.push(' '),
            Some('P') => result.push('\n'),
            Some('T') => result.push('\t'),
            Some('u') => {
                if chars.next() != Some('{') {
                    return Err(format!("转义序列 \\u 缺少 '{{'（值：\"{raw}\"）"));
                }
                let mut hex = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(digit) => hex.push(digit),
                        None => return Err(format!("转义序列 \\u 未闭合（值：\"{raw}\"）")),
                    }
                }
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("无效的字符码 \"{hex}\""))?;
                result.push(decoded);
            }
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_split_on_any_whitespace() {
        let mut reader = TokenReader::new("  Text 3\t4\n\n  hello\r\nRectangle");
        assert_eq!(reader.next_token(), Some("Text"));
        assert_eq!(reader.line(), 1);
        assert_eq!(reader.next_token(), Some("3"));
        assert_eq!(reader.next_token(), Some("4"));
        assert_eq!(reader.next_token(), Some("hello"));
        assert_eq!(reader.line(), 3);
        assert_eq!(reader.next_token(), Some("Rectangle"));
        assert_eq!(reader.line(), 4);
        assert_eq!(reader.next_token(), None);
        assert_eq!(reader.next_token(), None);
    }

    #[test]
    fn malformed_number_reports_line() {
        let mut reader = TokenReader::new("1\nabc");
        assert_eq!(reader.expect_f64("x").unwrap(), 1.0);
        let err = reader.expect_f64("y").unwrap_err();
        match err {
            IoError::InvalidRecord { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            reader.expect_token("z"),
            Err(IoError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn text_escapes_survive_tokenising() {
        let samples = ["hello", "", "two words", "a\\b", "line1\nline2\tend", "\\0", "x\u{3000}y"];
        for sample in samples {
            let encoded = encode_text(sample);
            assert!(!encoded.is_empty());
            assert!(!encoded.contains(char::is_whitespace), "{encoded:?}");
            assert_eq!(decode_text(&encoded).unwrap(), sample);
        }
        assert_eq!(encode_text("hello"), "hello");
        assert_eq!(encode_text("two words"), "two\\~words");
    }

    #[test]
    fn broken_unicode_escape_is_rejected() {
        assert!(decode_text("\\u{zz}").is_err());
        assert!(decode_text("\\u{41").is_err());
        assert_eq!(decode_text("\\u{41}").unwrap(), "A");
    }
}
