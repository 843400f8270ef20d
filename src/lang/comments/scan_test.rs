// Scanner tests.  Tokens are compared as (kind,lexeme,line,column).

#[cfg(test)]
use super::scanner::{scan,TokenKind};

#[cfg(test)]
fn test_scan(test_code: &str,expected: &[(TokenKind,&str,usize,usize)],expected_errors: usize) {
	let (tokens,errors) = scan(test_code);
	let actual: Vec<(TokenKind,&str,usize,usize)> = tokens.iter().map(|t| {
		(t.kind,t.lexeme.as_str(),t.pos.line,t.pos.column)
	}).collect();
	assert_eq!(actual,expected.to_vec());
	assert_eq!(errors.len(),expected_errors);
}

mod single_line_tests {
	use super::super::scanner::TokenKind::*;
	#[test]
	fn no_comments() {
		super::test_scan("x = 1 + 2\ny = x\n",&[],0);
	}
	#[test]
	fn hello() {
		super::test_scan("# hello\nworld",&[
			(SingleLineCommentStart,"#",1,1),
			(CommentText,"hello",1,2)
		],0);
	}
	#[test]
	fn trailing() {
		super::test_scan("x = 1  #  note  \r\ny = 2 # two",&[
			(SingleLineCommentStart,"#",1,8),
			(CommentText,"note",1,9),
			(SingleLineCommentStart,"#",2,7),
			(CommentText,"two",2,8)
		],0);
	}
	#[test]
	fn empty() {
		super::test_scan("#",&[
			(SingleLineCommentStart,"#",1,1),
			(CommentText,"",1,2)
		],0);
	}
	#[test]
	fn quotes_inside() {
		super::test_scan("# it's '''\nz",&[
			(SingleLineCommentStart,"#",1,1),
			(CommentText,"it's '''",1,2)
		],0);
	}
	#[test]
	fn columns_count_characters() {
		super::test_scan("é # ñ",&[
			(SingleLineCommentStart,"#",1,3),
			(CommentText,"ñ",1,4)
		],0);
	}
}

mod multi_line_tests {
	use super::super::scanner::TokenKind::*;
	#[test]
	fn one_line() {
		super::test_scan("'''abc'''",&[
			(MultiLineCommentStart,"'''",1,1),
			(CommentText,"abc",1,4),
			(MultiLineCommentEnd,"'''",1,7)
		],0);
	}
	#[test]
	fn two_lines() {
		super::test_scan("x\n\"\"\" a\nb \"\"\"",&[
			(MultiLineCommentStart,"\"\"\"",2,1),
			(CommentText,"a\nb",2,4),
			(MultiLineCommentEnd,"\"\"\"",3,3)
		],0);
	}
	#[test]
	fn unterminated() {
		let (tokens,errors) = super::super::scanner::scan("'''abc\ndef");
		assert_eq!(tokens.len(),2);
		assert_eq!(tokens[1].lexeme,"abc\ndef");
		assert_eq!(errors.len(),1);
		assert!(errors[0].contains("line 1, position 1"));
	}
	#[test]
	fn short_runs_ignored() {
		super::test_scan("it''s 'x' \"y\" ''",&[],0);
	}
	#[test]
	fn marker_inside_block() {
		super::test_scan("'''a # b'''",&[
			(MultiLineCommentStart,"'''",1,1),
			(CommentText,"a # b",1,4),
			(MultiLineCommentEnd,"'''",1,9)
		],0);
	}
	#[test]
	fn other_quote_inside_block() {
		super::test_scan("'''a\"\"\"b'''",&[
			(MultiLineCommentStart,"'''",1,1),
			(CommentText,"a\"\"\"b",1,4),
			(MultiLineCommentEnd,"'''",1,9)
		],0);
	}
	#[test]
	fn consecutive_blocks() {
		super::test_scan("'''a''' # b\n\"\"\"c\"\"\"",&[
			(MultiLineCommentStart,"'''",1,1),
			(CommentText,"a",1,4),
			(MultiLineCommentEnd,"'''",1,5),
			(SingleLineCommentStart,"#",1,9),
			(CommentText,"b",1,10),
			(MultiLineCommentStart,"\"\"\"",2,1),
			(CommentText,"c",2,4),
			(MultiLineCommentEnd,"\"\"\"",2,5)
		],0);
	}
}

#[test]
fn token_records() {
	let (tokens,_errors) = scan("\n  # hi");
	let rec = tokens[0].record();
	assert_eq!(rec.code,1);
	assert_eq!(rec.typ,"single-line comment start");
	assert_eq!(rec.value,"#");
	assert_eq!(rec.position,"Line 2, Position 3");
	let rec = tokens[1].record();
	assert_eq!(rec.code,4);
	assert_eq!(rec.position,"Line 2, Position 4");
	let json = serde_json::to_value(&rec).expect("could not serialize");
	assert_eq!(json["type"],"comment text");
	assert_eq!(json["value"],"hi");
}
