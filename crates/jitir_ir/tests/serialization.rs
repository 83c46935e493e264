mod common;

use jitir_ir::{IrBlock, IrType, Temp};

const ADD_BLOCK_JSON: &str = r#"
{
  "tyenv": [{ "tmp": 0, "ty": "I32" }, { "tmp": 1, "ty": "I32" }],
  "stmts": [
    {
      "Tmp": {
        "tmp": 1,
        "expr": { "Binop": { "op": "Add32", "arg1": { "Tmp": 0 }, "arg2": { "Const": { "U8": 5 } } } }
      }
    }
  ],
  "next": { "UJump": { "dst": { "U32": 4194304 } } }
}
"#;

#[test]
fn json_block_matches_built_block() {
  let loaded: IrBlock = serde_json::from_str(ADD_BLOCK_JSON).unwrap();

  assert_eq!(loaded, common::add_block());
  assert_eq!(loaded.to_string(), "   t0:I32   t1:I32\n   t1 = Add32(t0,0x5)\n   UJump 0x400000\n");
}

#[test]
fn json_tyenv_keeps_order_and_shadowing() {
  let json = r#"{
    "tyenv": [{ "tmp": 4, "ty": "I8" }, { "tmp": 4, "ty": "I64" }],
    "stmts": [],
    "next": { "IJump": { "dst": { "Tmp": 4 } } }
  }"#;
  let loaded: IrBlock = serde_json::from_str(json).unwrap();

  assert_eq!(loaded.tyenv.lookup(Temp(4)), IrType::I8);
  assert_eq!(loaded.tyenv.capacity(), 8);
  assert_eq!(loaded.to_string(), "   t4:I8   t4:I64\n   IJump t4\n");
}

#[test]
fn json_tyenv_is_a_plain_maplet_list() {
  let value = serde_json::to_value(&common::add_block().tyenv).unwrap();

  assert_eq!(value, serde_json::json!([{ "tmp": 0, "ty": "I32" }, { "tmp": 1, "ty": "I32" }]));
}

#[test]
fn json_rejects_unknown_operator() {
  let json = r#"{ "Unop": { "op": "Rol32", "arg": { "Tmp": 0 } } }"#;

  assert!(serde_json::from_str::<jitir_ir::Expr>(json).is_err());
}
