//! Server-rendered HTML.
//!
//! Every piece of user text goes through [`escape`]. The task list markup is
//! shared between the dashboard and the live feed so a pushed snapshot can
//! replace `#tasks` wholesale.

use crate::libs::counters::HomeCounters;
use crate::libs::detail::TaskDetail;
use crate::libs::formatter::{format_date, share_url};
use crate::libs::session::Identity;
use crate::libs::task::Task;
use std::fmt::Write;

/// Links and identity shown in the page header.
pub struct Header<'a> {
    pub identity: Option<&'a Identity>,
    pub sign_in_url: String,
    pub sign_out_url: String,
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, header: &Header<'_>, body: &str) -> String {
    let nav = match header.identity {
        Some(identity) => format!(
            r#"<span class="user">{}</span> <a href="/dashboard">Meu painel</a> <a href="{}">Sair</a>"#,
            escape(identity.display_name().unwrap_or(&identity.email)),
            escape(&header.sign_out_url)
        ),
        None => format!(r#"<a href="{}">Acessar</a>"#, escape(&header.sign_in_url)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title></head>
<body>
<header><a href="/"><strong>Tarefas</strong></a> <nav>{}</nav></header>
<main>
{}
</main>
</body>
</html>"#,
        escape(title),
        nav,
        body
    )
}

pub fn home(header: &Header<'_>, counters: &HomeCounters) -> String {
    let body = format!(
        r#"<h1>Sistema feito para você organizar seus estudos e tarefas</h1>
<section class="counters">
<span class="counter">+{} posts</span>
<span class="counter">+{} comentários</span>
</section>"#,
        counters.tasks, counters.comments
    );
    layout("Tarefas", header, &body)
}

/// Inner markup of `#tasks`.
pub fn task_list(tasks: &[Task], base_url: &str, date_format: &str) -> String {
    let mut out = String::new();
    for task in tasks {
        let _ = write!(out, r#"<article class="task" data-id="{}">"#, escape(&task.id));
        if task.is_public {
            let _ = write!(
                out,
                r#"<div class="tag">PÚBLICO <a href="/dashboard/task/{}">Ver</a> <button type="button" class="share" data-url="{}">Compartilhar</button></div>"#,
                escape(&task.id),
                escape(&share_url(base_url, &task.id))
            );
        }
        let _ = write!(
            out,
            r#"<h2>{}</h2><p style="white-space:pre-wrap">{}</p><time>{}</time><form method="post" action="/dashboard/tasks/{}/delete"><button type="submit">Excluir</button></form></article>"#,
            escape(&task.title),
            escape(&task.description),
            escape(&format_date(&task.created, date_format)),
            escape(&task.id)
        );
    }
    out
}

const LIVE_SCRIPT: &str = r#"<script>
(function () {
  var tasks = document.getElementById("tasks");
  var proto = location.protocol === "https:" ? "wss://" : "ws://";
  var socket = new WebSocket(proto + location.host + "/dashboard/live");
  socket.onmessage = function (event) {
    var msg = JSON.parse(event.data);
    if (msg.type === "snapshot") { tasks.innerHTML = msg.data.html; }
  };
  tasks.addEventListener("click", function (event) {
    var url = event.target.getAttribute("data-url");
    if (url && navigator.clipboard) { navigator.clipboard.writeText(url); }
  });
})();
</script>"#;

pub fn dashboard(header: &Header<'_>, tasks: &[Task], base_url: &str, date_format: &str) -> String {
    let body = format!(
        r#"<section class="form">
<h1>Qual sua tarefa?</h1>
<form method="post" action="/dashboard/tasks">
<input name="title" placeholder="Título da tarefa" required>
<textarea name="description" placeholder="Digite qual sua tarefa..."></textarea>
<label><input type="checkbox" name="is_public" value="true"> Deixar tarefa pública?</label>
<button type="submit">Registrar</button>
</form>
</section>
<section>
<h1>Minhas tarefas</h1>
<div id="tasks">{}</div>
</section>
{}"#,
        task_list(tasks, base_url, date_format),
        LIVE_SCRIPT
    );
    layout("Meu painel de tarefas", header, &body)
}

pub fn task_detail(header: &Header<'_>, detail: &TaskDetail) -> String {
    let task = &detail.task;
    let mut body = format!(
        r#"<article class="task"><h1>Tarefa</h1><h2>{}</h2><p style="white-space:pre-wrap">{}</p><time>{}</time></article>"#,
        escape(&task.title),
        escape(&task.description),
        escape(&detail.created)
    );

    let thread = escape(detail.comments.task_id());
    let _ = write!(
        body,
        r#"<section class="comment-form"><h2>Deixar comentário</h2><form method="post" action="/dashboard/task/{}/comments"><textarea name="comment" placeholder="Digite seu comentário..."></textarea><button type="submit">Comentar</button></form></section>"#,
        thread
    );

    body.push_str(r#"<section class="comments"><h2>Todos comentários</h2>"#);
    if detail.comments.is_empty() {
        body.push_str("<p>Nenhum comentário foi encontrado...</p>");
    }
    for entry in detail.comments.entries(header.identity) {
        let comment = entry.comment;
        let _ = write!(body, r#"<article class="comment"><strong>{}</strong>"#, escape(&comment.name));
        if entry.can_delete {
            let _ = write!(
                body,
                r#"<form method="post" action="/dashboard/task/{}/comments/{}/delete"><button type="submit">Excluir</button></form>"#,
                thread,
                escape(&comment.id)
            );
        }
        let _ = write!(body, r#"<p style="white-space:pre-wrap">{}</p></article>"#, escape(&comment.comment));
    }
    body.push_str("</section>");

    layout("Detalhes da tarefa", header, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::timestamp::Timestamp;

    fn header(identity: Option<&Identity>) -> Header<'_> {
        Header {
            identity,
            sign_in_url: "http://auth/signin".to_string(),
            sign_out_url: "http://auth/signout".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"x" & 'y'</b>"#), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_share_control_only_on_public_tasks() {
        let mut task = Task {
            id: "t1".to_string(),
            title: "<Study>".to_string(),
            description: "Ch.1-3".to_string(),
            created: Timestamp::from_seconds(1_700_000_000),
            user: "a@example.com".to_string(),
            is_public: false,
        };
        let html = task_list(std::slice::from_ref(&task), "http://localhost:3000", "%Y");
        assert!(!html.contains("class=\"share\""));
        assert!(html.contains("&lt;Study&gt;"));

        task.is_public = true;
        let html = task_list(&[task], "http://localhost:3000", "%Y");
        assert!(html.contains(r#"data-url="http://localhost:3000/dashboard/task/t1""#));
        assert!(html.contains(r#"<a href="/dashboard/task/t1">Ver</a>"#));
    }

    #[test]
    fn test_description_keeps_line_breaks() {
        let task = Task {
            id: "t1".to_string(),
            title: "Study".to_string(),
            description: "Ch.1\nCh.2".to_string(),
            created: Timestamp::from_seconds(1_700_000_000),
            user: "a@example.com".to_string(),
            is_public: false,
        };
        let html = task_list(&[task], "http://localhost:3000", "%Y");
        assert!(html.contains(r#"<p style="white-space:pre-wrap">Ch.1
Ch.2</p>"#));
    }

    #[test]
    fn test_header_links() {
        let ana = Identity::new("ana@example.com", Some("Ana"));
        let html = home(&header(Some(&ana)), &HomeCounters::default());
        assert!(html.contains("Ana"));
        assert!(html.contains("http://auth/signout"));

        let html = home(&header(None), &HomeCounters { tasks: 3, comments: 7 });
        assert!(html.contains("http://auth/signin"));
        assert!(html.contains("+3 posts"));
        assert!(html.contains("+7 comentários"));
    }
}
