//! Shared test graphs.

use crate::builder::GitHubGraphBuilder;
use crate::payload::{
    AuthorPayload, AuthorSubtype, CommentPayload, IssuePayload, PullRequestPayload,
    RepositoryPayload, ReviewCommentPayload, ReviewPayload, ReviewState,
};
use cred_graph::Address;

/// Addresses of everything in [`acme_widgets`].
pub struct Acme {
    pub repo: Address,
    pub issue: Address,
    pub pull: Address,
    pub comment: Address,
    pub review: Address,
    pub review_comment: Address,
    pub alice: Address,
    pub bob: Address,
}

pub fn repository(owner: &str, name: &str) -> RepositoryPayload {
    RepositoryPayload {
        url: format!("https://github.com/{}/{}", owner, name),
        owner: owner.into(),
        name: name.into(),
    }
}

pub fn issue_payload(number: u64, title: &str) -> IssuePayload {
    IssuePayload {
        url: format!("https://github.com/acme/widgets/issues/{}", number),
        number,
        title: title.into(),
        body: format!("{} body", title),
    }
}

pub fn pull_payload(number: u64, title: &str) -> PullRequestPayload {
    PullRequestPayload {
        url: format!("https://github.com/acme/widgets/pull/{}", number),
        number,
        title: title.into(),
        body: format!("{} body", title),
    }
}

pub fn user(login: &str) -> AuthorPayload {
    AuthorPayload {
        url: format!("https://github.com/{}", login),
        login: login.into(),
        subtype: AuthorSubtype::User,
    }
}

/// acme/widgets with issue #1 "Bug" (by alice and bob, with one comment
/// by bob) and pull request #1 "Fix" (by alice, referencing the issue,
/// with one approving review that has one review comment).
pub fn acme_widgets() -> (GitHubGraphBuilder, Acme) {
    let mut b = GitHubGraphBuilder::new();

    let repo = b.repository(repository("acme", "widgets")).unwrap();
    let issue = b.issue("acme/widgets#issue-1", issue_payload(1, "Bug")).unwrap();
    let pull = b.pull_request("acme/widgets#pull-1", pull_payload(1, "Fix")).unwrap();
    let comment = b
        .comment(
            "acme/widgets#issue-1/c1",
            CommentPayload {
                url: "https://github.com/acme/widgets/issues/1#c1".into(),
                body: "me too".into(),
            },
        )
        .unwrap();
    let review = b
        .review(
            "acme/widgets#pull-1/r1",
            ReviewPayload {
                url: "https://github.com/acme/widgets/pull/1#r1".into(),
                body: "lgtm".into(),
                state: ReviewState::Approved,
            },
        )
        .unwrap();
    let review_comment = b
        .review_comment(
            "acme/widgets#pull-1/r1/rc1",
            ReviewCommentPayload {
                url: "https://github.com/acme/widgets/pull/1#rc1".into(),
                body: "nit".into(),
            },
        )
        .unwrap();
    let alice = b.author(user("alice")).unwrap();
    let bob = b.author(user("bob")).unwrap();

    b.authors(&issue, &alice).unwrap();
    b.authors(&issue, &bob).unwrap();
    b.authors(&comment, &bob).unwrap();
    b.authors(&pull, &alice).unwrap();
    b.authors(&review, &bob).unwrap();
    b.contains(&issue, &comment).unwrap();
    b.contains(&pull, &review).unwrap();
    b.contains(&review, &review_comment).unwrap();
    b.references(&pull, &issue).unwrap();

    let acme = Acme {
        repo,
        issue,
        pull,
        comment,
        review,
        review_comment,
        alice,
        bob,
    };
    (b, acme)
}
