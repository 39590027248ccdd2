//! The stock introductory script, used when no script is configured.

/// A short self-describing conversation. The `COMPLETE` next-step ID is
/// deliberately dangling: an absent step terminates the chat.
pub const DEFAULT_SCRIPT: &str = "- 1:
    messages: Hello there, would you like to chat for a bit?
    responses:
    - Yes, of course!: 3
    - No, not right now: 2
- 2:
    messages:
    - OK, maybe another time then.
    - Have a nice day!
    responses:
    - Bye!: COMPLETE
- 3:
    messages:
    - Great!
    - Would you like to know my name first?
    responses:
    - 'Yes': 4
    - 'No': 5
- 4:
    messages:
    - My name is Bot. And I believe you are [NAME].
    responses:
    - Nice to meet you!: 5
    - That is not my name.: 5
- 5:
    messages:
    - Would you like to learn how this chat works?
    responses:
    - Yes, please!: 6
    - 'No': 2
- 6:
    messages:
    - It's easy!
    - It's all in the README!
";
