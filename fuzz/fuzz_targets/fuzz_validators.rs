#![no_main]

use api_validators_core::{
    extract_ids, json_should_contain_nested_key, validate_email_format, validate_iso_date_format,
    validate_url_format, Keyword,
};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

// Input layout: `<key path>\n<json document>`. Non-UTF-8 input is ignored.
// Keywords get `[doc]`, `[doc, path]` and `[doc, path, doc]` so every arity is reached.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = validate_email_format(text);
    let _ = validate_url_format(text);
    let _ = validate_iso_date_format(text);

    let (path, body) = text.split_once('\n').unwrap_or((text, ""));
    if let Ok(doc) = serde_json::from_str::<Value>(body) {
        let _ = json_should_contain_nested_key(&doc, path);
        if let Value::Array(items) = &doc {
            let _ = extract_ids(items);
        }
        let key = Value::String(path.to_string());
        let arg_sets = [
            vec![doc.clone()],
            vec![doc.clone(), key.clone()],
            vec![doc.clone(), key, doc.clone()],
        ];
        for keyword in Keyword::ALL {
            for args in &arg_sets {
                let _ = keyword.run(args);
            }
        }
    }
});
