//! Simulates a small cluster on the local machine and serves its state on
//! `http://127.0.0.1:8551/cluster-state` until interrupted.
use std::sync::Arc;
use std::time::Duration;

use cluster_monitor::cluster::{
    ClusterMember, Member, MemberAddress, MemberEvent, MembershipRegistry,
};
use cluster_monitor::config::MonitorConfigBuilder;
use cluster_monitor::member_status::MemberStatus;
use cluster_monitor::monitor::ClusterMonitor;
use cluster_monitor::server;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

fn member(port: u16) -> ClusterMember {
    ClusterMember::joining(MemberAddress::remote("cluster", "demo", "127.0.0.1", port))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let self_member = member(2551);
    let registry = Arc::new(MembershipRegistry::new(self_member.clone()));

    let (event_sender, event_receiver) = broadcast::channel(64);
    let listener = registry.clone().listen(event_receiver);

    let config = MonitorConfigBuilder::new()
        .build()
        .expect("Invalid monitor configuration");
    let handle = server::start(ClusterMonitor::new(registry, config))
        .await
        .expect("Cannot start monitor server")
        .expect("Local node is not monitored");

    println!(
        "Cluster state available at http://{}{}",
        handle.local_addr(),
        server::CLUSTER_STATE_PATH
    );

    let others: Vec<_> = (2552..=2554).map(member).collect();

    let mut events = vec![MemberEvent::Up(self_member.with_up_number(1))];
    for (up_number, other) in (2..).zip(&others) {
        events.push(MemberEvent::Joined(other.clone()));
        events.push(MemberEvent::Up(other.with_up_number(up_number)));
    }
    events.push(MemberEvent::LeaderChanged(Some(self_member.address().clone())));
    events.push(MemberEvent::Unreachable(others[1].with_up_number(3)));
    events.push(MemberEvent::Left(
        others[2].with_up_number(4).with_status(MemberStatus::Leaving),
    ));

    for event in events {
        println!("Cluster event: {event}");
        event_sender.send(event).expect("Membership listener stopped");
        sleep(Duration::from_secs(1)).await;
    }

    tokio::signal::ctrl_c()
        .await
        .expect("Cannot listen for interrupt signal");

    drop(event_sender);
    let _ = listener.await;

    handle.shutdown().await.expect("Monitor server error");
}
