macro_rules! fl {
  ($message_id:literal) => {{
    i18n_embed_fl::fl!($crate::i18n::MESSAGES, $message_id)
  }};
}
