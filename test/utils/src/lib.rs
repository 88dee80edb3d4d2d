/// A conversation as returned by `GET /chat/42`, with two messages.
pub fn conversation_fixture() -> &'static str {
    return r#"
{
    "id": 42,
    "title": "Arithmetic",
    "messages": [
        {
            "id": 1,
            "content": "What is 2 + 2?",
            "type": "general",
            "role": "user",
            "created_at": "2024-03-01T10:15:00.123456"
        },
        {
            "id": 2,
            "content": "4",
            "type": "calculator",
            "role": "assistant",
            "created_at": "2024-03-01T10:15:02.000000",
            "original_message": "2 + 2"
        }
    ],
    "created_at": "2024-03-01T10:14:59.000000",
    "updated_at": "2024-03-01T10:15:02.000000"
}
"#
    .trim();
}

/// Same conversation after `hello` was sent to it.
pub fn conversation_after_send_fixture() -> &'static str {
    return r#"
{
    "id": 42,
    "title": "Arithmetic",
    "messages": [
        {
            "id": 1,
            "content": "What is 2 + 2?",
            "type": "general",
            "role": "user",
            "created_at": "2024-03-01T10:15:00.123456"
        },
        {
            "id": 2,
            "content": "4",
            "type": "calculator",
            "role": "assistant",
            "created_at": "2024-03-01T10:15:02.000000",
            "original_message": "2 + 2"
        },
        {
            "id": 3,
            "content": "hello",
            "type": "general",
            "role": "user",
            "created_at": "2024-03-01T10:20:00.000000"
        }
    ],
    "created_at": "2024-03-01T10:14:59.000000",
    "updated_at": "2024-03-01T10:20:00.000000"
}
"#
    .trim();
}

/// Response to `POST /chat/42/messages` with `{"message":"hello"}`.
pub fn sent_message_fixture() -> &'static str {
    return r#"
{
    "id": 3,
    "content": "hello",
    "type": "general",
    "role": "user",
    "created_at": "2024-03-01T10:20:00.000000"
}
"#
    .trim();
}

/// `GET /chat` listing, where list entries may omit messages.
pub fn conversation_list_fixture() -> &'static str {
    return r#"
[
    {
        "id": 1,
        "title": "New Conversation",
        "created_at": "2024-02-28T08:00:00+00:00",
        "updated_at": "2024-02-28T08:00:00+00:00"
    },
    {
        "id": 42,
        "title": "Arithmetic",
        "messages": [],
        "created_at": "2024-03-01T10:14:59.000000",
        "updated_at": "2024-03-01T10:15:02.000000"
    }
]
"#
    .trim();
}

/// Response to `POST /chat`.
pub fn created_conversation_fixture() -> &'static str {
    return r#"
{
    "id": 43,
    "title": "New Conversation",
    "messages": [],
    "created_at": "2024-03-02T09:00:00.000000",
    "updated_at": "2024-03-02T09:00:00.000000"
}
"#
    .trim();
}

/// A message produced by a backend tool this client has no renderer for.
pub fn command_message_fixture() -> &'static str {
    return r#"
{
    "id": 9,
    "content": "ls -la",
    "type": "command",
    "role": "system",
    "created_at": "2024-03-02T08:00:00.000000"
}
"#
    .trim();
}

/// A conversation as returned by `GET /chat/5`, mixing known and unknown message types.
pub fn conversation_with_command_fixture() -> &'static str {
    return r#"
{
    "id": 5,
    "title": "Shell",
    "messages": [
        {
            "id": 8,
            "content": "list the files",
            "type": "general",
            "role": "user",
            "created_at": "2024-03-02T07:59:58.000000"
        },
        {
            "id": 9,
            "content": "ls -la",
            "type": "command",
            "role": "system",
            "created_at": "2024-03-02T08:00:00.000000"
        }
    ],
    "created_at": "2024-03-02T07:59:50.000000",
    "updated_at": "2024-03-02T08:00:00.000000"
}
"#
    .trim();
}
